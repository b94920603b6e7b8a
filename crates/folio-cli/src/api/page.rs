//! Web chat page served at `/`

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Portfolio Assistant</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; background: #f6f7fb; }
  h1 { font-size: 1.4rem; }
  #log { background: #fff; border-radius: 8px; padding: 1rem; min-height: 320px; max-height: 60vh; overflow-y: auto; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
  .msg { margin: .5rem 0; white-space: pre-wrap; }
  .user { color: #1a4fb5; }
  .bot { color: #222; }
  .err { color: #b51a1a; }
  form { display: flex; gap: .5rem; margin-top: 1rem; }
  input { flex: 1; padding: .6rem; border: 1px solid #ccc; border-radius: 6px; }
  button { padding: .6rem 1rem; border: 0; border-radius: 6px; background: #1a4fb5; color: #fff; cursor: pointer; }
  #status { font-size: .8rem; color: #666; margin-top: .5rem; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Portfolio Assistant</h1>
<div id="log"></div>
<form id="ask">
  <input id="question" autocomplete="off" placeholder="Ask about projects, skills or background">
  <button type="submit">Send</button>
  <button type="button" id="switch">Reset model</button>
</form>
<div id="status"></div>
<script>
const log = document.getElementById('log');
const status = document.getElementById('status');

function add(cls, text) {
  const div = document.createElement('div');
  div.className = 'msg ' + cls;
  div.textContent = text;
  log.appendChild(div);
  log.scrollTop = log.scrollHeight;
}

document.getElementById('ask').addEventListener('submit', async (e) => {
  e.preventDefault();
  const input = document.getElementById('question');
  const question = input.value.trim();
  if (!question) return;
  input.value = '';
  add('user', 'You: ' + question);
  try {
    const res = await fetch('/api/ask', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ question })
    });
    const data = await res.json();
    if (data.success) {
      add('bot', data.response);
      status.textContent = data.model_status;
    } else {
      add('err', data.error);
    }
  } catch (err) {
    add('err', 'Request failed: ' + err);
  }
});

document.getElementById('switch').addEventListener('click', async () => {
  const res = await fetch('/api/switch-model', { method: 'POST' });
  const data = await res.json();
  add('bot', data.switch_result || data.error);
});
</script>
</body>
</html>
"#;
