extern crate fantasy_stats;

fn main() -> anyhow::Result<()> {
    let config = fantasy_stats::init_env()?;
    let html = fantasy_stats::render_from_config(&config)?;
    println!("{}", html);
    Ok(())
}
