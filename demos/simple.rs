use bubbler::{ArrowDirection, BubbleConfig, Size, SvgOptions};

fn main() -> miette::Result<()> {
    let mut args = std::env::args().skip(1);
    let direction = match args.next() {
        Some(name) => name.parse::<ArrowDirection>().map_err(|e| miette::miette!("{e}"))?,
        None => ArrowDirection::Bottom,
    };
    let position = match args.next() {
        Some(value) => value
            .parse::<f64>()
            .map_err(|e| miette::miette!("bad position {value:?}: {e}"))?,
        None => 0.5,
    };

    let config = BubbleConfig::new()
        .with_corner_radius(10.0)
        .with_arrow_radius(2.0)
        .with_arrow_height(14.0)
        .with_arrow_width(18.0)
        .with_arrow_direction(direction)
        .with_arrow_position(position);

    let shape = bubbler::layer(Size::new(220.0, 120.0), &config)?;
    println!("{}", shape.to_svg(&SvgOptions::default())?);
    Ok(())
}
