use std::env;

use cigcount::ShapeCounter;

fn main() -> anyhow::Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| "scene.png".to_string());
    let counter = ShapeCounter::new().with_verbose(true);

    let count = counter.count_path(&path)?;
    println!("\n{}: {} cigarette ends", path, count);
    Ok(())
}
