//! Usage page served when no target is given.

/// Static usage and test page.
pub const DEMO_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Universal CORS Proxy</title>
<style>
body{font-family:Arial,sans-serif;max-width:800px;margin:0 auto;padding:20px}
code{background:#f4f4f4;padding:10px;display:block;margin:10px 0}
.status{font-weight:bold}
.error{color:red}
.success{color:green}
</style>
</head>
<body>
<h1>Universal CORS Proxy</h1>
<p>Make cross-origin requests to any API.</p>
<h2>Usage</h2>
<code>http://localhost:8111/?url=https://api.example.com/endpoint</code>
<h2>Test</h2>
<input type="url" id="u" placeholder="API URL" style="width:400px;padding:5px">
<button onclick="t()">GET</button>
<button onclick="p()">POST</button>
<h3>Result:</h3>
<p class="status" id="s">Ready</p>
<code id="r">No requests made</code>
<script>
async function t(){
        const u=document.getElementById('u').value,s=document.getElementById('s'),r=document.getElementById('r');
        if(!u){s.textContent='Enter URL';s.className='status error';return}
        try{
                s.textContent='Loading...';s.className='status';
                const x=await fetch('/?url='+encodeURIComponent(u)),d=await x.text();
                s.textContent='Success: '+x.status;s.className='status success';r.textContent=d
        }catch(e){
                s.textContent='Error: '+e.message;s.className='status error';r.textContent=e
        }
}
async function p(){
        const u=document.getElementById('u').value,s=document.getElementById('s'),r=document.getElementById('r');
        if(!u){s.textContent='Enter URL';s.className='status error';return}
        try{
                s.textContent='Loading...';s.className='status';
                const x=await fetch('/?url='+encodeURIComponent(u),{
                        method:'POST',
                        headers:{'Content-Type':'application/json'},
                        body:JSON.stringify({msg:'Hello',ts:Date.now()})
                }),d=await x.text();
                s.textContent='Success: '+x.status;s.className='status success';r.textContent=d
        }catch(e){
                s.textContent='Error: '+e.message;s.className='status error';r.textContent=e
        }
}
</script>
</body>
</html>"#;
