use folio_core::{PageMetadata, parse_site_toml};
use folio_generator::build_structured_data;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let config_path = path.join("site.toml");
    let site = parse_site_toml(&config_path)?;

    println!("✓ site.toml valid");
    println!("  Site: {} by {}", site.info.title, site.author.name);
    println!("  Pages: {}", site.pages.len());

    let mut errors = 0;
    let mut warnings = 0;

    for page in &site.pages {
        if let Some(content) = &page.content
            && !path.join(content).is_file()
        {
            println!(
                "✗ {}: content file not found: {}",
                page.title,
                content.display()
            );
            errors += 1;
        }

        let meta = PageMetadata::for_page(&site, page);
        for field in meta.missing_fields() {
            println!("⚠ {}: {} is empty", page.title, field);
            warnings += 1;
        }

        build_structured_data(&meta).to_json()?;
    }

    if errors > 0 {
        anyhow::bail!("{} error(s), {} warning(s)", errors, warnings);
    }

    println!("\n✓ {} page(s) ok, {} warning(s)", site.pages.len(), warnings);

    Ok(())
}
