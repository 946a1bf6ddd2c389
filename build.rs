fn main() {
    // Rerun if the popup assets change
    println!("cargo:rerun-if-changed=frontend/");

    // Keep the embed target present so a fresh checkout still builds
    let frontend_path = std::path::Path::new("frontend");
    if !frontend_path.exists() {
        eprintln!("Warning: frontend/ directory not found, writing placeholder popup.");

        std::fs::create_dir_all("frontend").ok();
        std::fs::write(
            "frontend/index.html",
            r#"<!DOCTYPE html>
<html>
<head>
    <title>BrowserFox</title>
    <style>
        body { font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: #1a1a2e; color: #eee; }
    </style>
</head>
<body>
    <div>
        <h1>BrowserFox</h1>
        <p>API is running. Popup assets not embedded — restore frontend/index.html and rebuild.</p>
    </div>
</body>
</html>"#,
        )
        .ok();
    }
}
