use chrono::{Datelike, Utc};

const PAGE_BASE_STYLES: &str = r#"
        :root { color-scheme: light; }
        body { font-family: "Helvetica Neue", Arial, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; min-height: 100vh; display: flex; flex-direction: column; }
        header { background: #ffffff; padding: 2rem 1.5rem; border-bottom: 1px solid #e2e8f0; }
        .header-bar { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; max-width: 960px; margin: 0 auto; }
        .header-bar h1 { margin: 0; font-size: clamp(1.6rem, 3vw, 2.1rem); }
        main { flex: 1; padding: 2rem 1.5rem; max-width: 960px; width: 100%; margin: 0 auto; box-sizing: border-box; display: grid; gap: 1.5rem; }
        .panel { background: #ffffff; border-radius: 12px; border: 1px solid #e2e8f0; padding: 1.5rem; box-shadow: 0 18px 40px rgba(15, 23, 42, 0.08); }
        .panel h2 { margin-top: 0; }
        label { display: block; margin: 0.9rem 0 0.4rem; font-weight: 600; }
        input[type="text"], input[type="date"], input[type="file"] { width: 100%; padding: 0.75rem; border-radius: 8px; border: 1px solid #cbd5f5; background: #f8fafc; color: #0f172a; box-sizing: border-box; }
        button { margin-top: 1rem; padding: 0.75rem 1.2rem; border: none; border-radius: 8px; background: #2563eb; color: #ffffff; font-weight: 600; cursor: pointer; transition: background 0.15s ease; }
        button:hover { background: #1d4ed8; }
        button.secondary { background: #e2e8f0; color: #0f172a; }
        button.danger { background: #dc2626; }
        .status-box { margin-top: 1rem; padding: 0.85rem 1rem; border-radius: 10px; background: #f1f5f9; min-height: 1.5rem; word-break: break-all; }
        .status-box.error { color: #b91c1c; }
        .status-box.success { color: #166534; }
        .file-list { list-style: none; padding: 0; margin: 1rem 0 0; }
        .file-list li { display: flex; align-items: center; gap: 0.6rem; padding: 0.5rem 0; border-bottom: 1px solid #e2e8f0; }
        .note { color: #475569; font-size: 0.95rem; line-height: 1.6; }
        .app-footer { margin: 2rem 0; text-align: center; font-size: 0.85rem; color: #94a3b8; }
"#;

/// Page shown to visitors without a valid access code.
pub fn render_access_page() -> String {
    let footer = render_footer();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>PDF Access</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="robots" content="noindex,nofollow">
    <style>
{styles}
    </style>
</head>
<body>
    <header>
        <div class="header-bar"><h1>PDF Folder Merger</h1></div>
    </header>
    <main>
        <section class="panel">
            <h2>Get an access code</h2>
            <form id="generate-code-form">
                <label for="name">Name</label>
                <input id="name" type="text" name="name" required>
                <label for="date">Date</label>
                <input id="date" type="date" name="date" required>
                <button type="submit">Generate code</button>
            </form>
            <div id="generated-code" class="status-box"></div>
        </section>
        <section class="panel">
            <h2>Log in</h2>
            <form method="post" action="/login">
                <label for="access_code">Access code</label>
                <input id="access_code" type="text" name="access_code" required>
                <button type="submit">Log in</button>
            </form>
        </section>
        {footer}
    </main>
    <script>
const codeForm = document.getElementById('generate-code-form');
const codeBox = document.getElementById('generated-code');
codeForm.addEventListener('submit', async (event) => {{
    event.preventDefault();
    const response = await fetch('/generate-code', {{
        method: 'POST',
        body: new URLSearchParams(new FormData(codeForm)),
    }});
    if (!response.ok) {{
        const payload = await response.json().catch(() => ({{ message: 'Request failed.' }}));
        codeBox.className = 'status-box error';
        codeBox.textContent = payload.message;
        return;
    }}
    const code = (await response.text()).trim();
    codeBox.className = 'status-box success';
    codeBox.textContent = code;
    document.getElementById('access_code').value = code;
}});
    </script>
</body>
</html>"#,
        styles = PAGE_BASE_STYLES,
        footer = footer,
    )
}

const WORKSPACE_SCRIPT: &str = r#"
const folderInput = document.getElementById('folder');
const statusBox = document.getElementById('status');
const fileList = document.getElementById('file-list');

function currentFolder() {
    const folder = folderInput.value.trim();
    if (!folder) {
        showStatus('Enter a folder name first.', true);
    }
    return folder;
}

function showStatus(message, isError) {
    statusBox.className = isError ? 'status-box error' : 'status-box success';
    statusBox.textContent = message;
}

async function failure(response) {
    const payload = await response.json().catch(() => ({ message: 'Request failed.' }));
    showStatus(payload.message, true);
}

async function refreshList() {
    const folder = currentFolder();
    if (!folder) return;
    const response = await fetch(`/list?folder=${encodeURIComponent(folder)}`);
    if (!response.ok) {
        fileList.innerHTML = '';
        return failure(response);
    }
    const files = await response.json();
    fileList.innerHTML = '';
    for (const name of files) {
        const item = document.createElement('li');
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.value = name;
        const label = document.createElement('span');
        label.textContent = name;
        item.append(box, label);
        fileList.append(item);
    }
    if (files.length === 0) {
        showStatus('The folder is empty.', false);
    }
}

async function deleteFiles(files) {
    const folder = currentFolder();
    if (!folder) return;
    const response = await fetch('/delete', {
        method: 'DELETE',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ folder, files }),
    });
    if (!response.ok) return failure(response);
    showStatus(files.length ? `Deleted ${files.length} file(s).` : 'Deleted every file.', false);
    refreshList();
}

document.getElementById('upload-form').addEventListener('submit', async (event) => {
    event.preventDefault();
    const folder = currentFolder();
    if (!folder) return;
    const data = new FormData(event.target);
    data.set('folder', folder);
    const response = await fetch('/upload', { method: 'POST', body: data });
    if (!response.ok) return failure(response);
    showStatus(await response.text(), false);
    event.target.reset();
    refreshList();
});

document.getElementById('refresh').addEventListener('click', refreshList);

document.getElementById('delete-selected').addEventListener('click', () => {
    const selected = [...fileList.querySelectorAll('input:checked')].map((box) => box.value);
    if (selected.length === 0) {
        showStatus('Select at least one file.', true);
        return;
    }
    deleteFiles(selected);
});

document.getElementById('delete-all').addEventListener('click', () => {
    if (confirm('Delete every file in this folder?')) {
        deleteFiles([]);
    }
});

document.getElementById('merge').addEventListener('click', async () => {
    const folder = currentFolder();
    if (!folder) return;
    const response = await fetch('/generate', {
        method: 'POST',
        body: new URLSearchParams({ folder }),
    });
    if (!response.ok) return failure(response);
    showStatus(await response.text(), false);
});

document.getElementById('download').addEventListener('click', () => {
    const folder = currentFolder();
    if (!folder) return;
    window.location.href = `/download?folder=${encodeURIComponent(folder)}`;
});
"#;

/// Page shown once the visitor holds a valid access code.
pub fn render_workspace_page() -> String {
    let footer = render_footer();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>PDF Folders</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="robots" content="noindex,nofollow">
    <style>
{styles}
    </style>
</head>
<body>
    <header>
        <div class="header-bar">
            <h1>PDF Folders</h1>
            <form method="post" action="/logout"><button type="submit" class="secondary">Log out</button></form>
        </div>
    </header>
    <main>
        <section class="panel">
            <label for="folder">Folder</label>
            <input id="folder" type="text" placeholder="e.g. contracts-2024">
            <p class="note">Files are merged in the order of their leading number. Files without one are numbered on upload.</p>
        </section>
        <section class="panel">
            <h2>Upload</h2>
            <form id="upload-form">
                <input type="file" name="pdfs" accept=".pdf" multiple required>
                <button type="submit">Upload</button>
            </form>
        </section>
        <section class="panel">
            <h2>Files</h2>
            <button type="button" id="refresh" class="secondary">Refresh</button>
            <button type="button" id="delete-selected" class="danger">Delete selected</button>
            <button type="button" id="delete-all" class="danger">Delete all</button>
            <ul id="file-list" class="file-list"></ul>
        </section>
        <section class="panel">
            <h2>Merge</h2>
            <button type="button" id="merge">Generate merged PDF</button>
            <button type="button" id="download" class="secondary">Download</button>
            <div id="status" class="status-box"></div>
        </section>
        {footer}
    </main>
    <script>
{script}
    </script>
</body>
</html>"#,
        styles = PAGE_BASE_STYLES,
        footer = footer,
        script = WORKSPACE_SCRIPT,
    )
}

pub fn render_footer() -> String {
    let current_year = Utc::now().year();
    format!(
        r#"<footer class="app-footer">© {year} PDF Folder Merger</footer>"#,
        year = current_year
    )
}
