use axum::response::Html;

/// GET /
/// Single-page upload form: resume file + job description textarea.
/// Posts to /api/v1/analyze and renders the returned report text.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>ATS CV Analyzer</title>
<style>
  body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
  textarea { width: 100%; height: 12rem; }
  #result { white-space: pre-wrap; border-top: 1px solid #ccc; margin-top: 1.5rem; padding-top: 1rem; }
  .error { color: #b00020; }
</style>
</head>
<body>
<h1>ATS CV Analyzer</h1>
<form id="analyze-form">
  <p><label>Upload your CV/Resume (PDF)<br>
    <input type="file" name="resume" accept="application/pdf" required></label></p>
  <p><label>Enter the job description<br>
    <textarea name="job_description" required></textarea></label></p>
  <p><button type="submit">Analyze</button></p>
</form>
<div id="result"></div>
<script>
const form = document.getElementById('analyze-form');
const result = document.getElementById('result');
form.addEventListener('submit', async (e) => {
  e.preventDefault();
  result.className = '';
  result.textContent = 'Analyzing…';
  try {
    const resp = await fetch('/api/v1/analyze', {
      method: 'POST',
      body: new FormData(form),
    });
    const body = await resp.json();
    if (!resp.ok) {
      result.className = 'error';
      result.textContent = body.error ? body.error.message : 'Analysis failed';
      return;
    }
    result.textContent = body.analysis;
  } catch (err) {
    result.className = 'error';
    result.textContent = 'Request failed: ' + err;
  }
});
</script>
</body>
</html>
"#;
