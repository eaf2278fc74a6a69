use ogimage::{Error, OgImageConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if !ogimage::imaging_available() {
        eprintln!("{}", Error::ImagingUnavailable);
        std::process::exit(1);
    }

    let config = OgImageConfig::default();
    let path = ogimage::run(&config)?;
    println!("Created: {}", path.display());
    Ok(())
}
