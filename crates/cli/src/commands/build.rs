use anyhow::{Context, Result};
use folio_core::{PageMetadata, config::parse_site_toml};
use folio_generator::generate_site;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'folio init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;

    println!("✓ Loaded: {}", site.info.title);
    println!("  Pages: {}", site.pages.len());
    println!();

    for page in &site.pages {
        let missing = PageMetadata::for_page(&site, page).missing_fields();
        if !missing.is_empty() {
            warn!(
                page = %page.title,
                fields = %missing.join(", "),
                "page metadata has empty fields; structured data will carry them as empty strings"
            );
        }
    }

    println!("📄 Generating pages...");
    let generated = generate_site(&site, &path).context("Failed to generate pages")?;
    fs::create_dir_all(&output).context("Failed to create output directory")?;
    for (page_path, html) in &generated.pages {
        let dst = output.join(page_path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, html).with_context(|| format!("Failed to write {}", dst.display()))?;
        info!(path = %page_path.display(), "wrote page");
    }
    println!("   ✓ Generated {} pages", generated.pages.len());

    println!("🎨 Copying static assets...");
    let copied = copy_static_assets(&path.join("static"), &output)?;
    println!("   ✓ Copied {} files", copied);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Copy everything under `static/` into the output root, keeping the layout
fn copy_static_assets(static_dir: &Path, output: &Path) -> Result<usize> {
    if !static_dir.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(static_dir).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(static_dir)
            .context("Static asset outside static directory")?;
        let dst = output.join(relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dst)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    Ok(copied)
}
