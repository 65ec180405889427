use std::env;

use gridcarve::{CarveOptions, FillMode, GridCarve, SelectionMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() != 6 {
        eprintln!(
            "Usage: {} <input_image> <rounds> <selection> <fill|none> <output_image>",
            args[0]
        );
        eprintln!("Example: {} input.png 40 min-hue-deviation gradient output.png", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let rounds: u32 = args[2].parse().map_err(|_| "Invalid rounds")?;
    let selection: SelectionMode = args[3].parse()?;
    let fill = match args[4].as_str() {
        "none" => None,
        mode => Some(mode.parse::<FillMode>()?),
    };
    let output_path = &args[5];

    let image = image::open(input_path)?.to_rgba8();
    println!(
        "Carving {}x{} image: {} rounds, {}",
        image.width(),
        image.height(),
        rounds,
        selection
    );

    let options = CarveOptions::default()
        .with_rounds(rounds)
        .with_selection(selection)
        .with_fill(fill);
    let carved = image.carve_grid(&options)?;

    carved.save(output_path)?;
    println!(
        "Saved {}x{} result to {}",
        carved.width(),
        carved.height(),
        output_path
    );

    Ok(())
}
