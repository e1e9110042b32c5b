use anyhow::Result;
use pwa_icons::config::Config;
use pwa_icons::generator::IconGenerator;
use pwa_icons::report::{created_line, error_line};

fn main() {
    // Every failure ends up here as one line on stdout; exit status stays 0
    if let Err(e) = run() {
        println!("{}", error_line(&e));
    }
}

fn run() -> Result<()> {
    let config = Config::load_or_create()?;

    let generator = IconGenerator::new(&config.paths.source_image, &config.paths.output_dir);
    generator.run(|target, _path| {
        println!("{}", created_line(target));
    })?;

    Ok(())
}
