use bubbler::{ArrowDirection, Bubble, BubbleConfig, Size, SvgOptions};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Same bubble, pointer moved around all four edges
    let mut bubble = Bubble::new(Size::new(160.0, 100.0));
    for direction in ArrowDirection::ALL {
        let config = BubbleConfig::new()
            .with_corner_radius(8.0)
            .with_arrow_radius(1.5)
            .with_arrow_height(12.0)
            .with_arrow_width(16.0)
            .with_arrow_direction(direction)
            .with_arrow_position(0.3);
        let shape = bubble.update_config(config)?;

        for d in bubble.key_points()?.degeneracies(bubble.config()) {
            tracing::warn!(?d, "overlapping fillet");
        }

        println!("=== {direction} ===");
        println!("{}", shape.to_svg(&SvgOptions::default())?);
    }
    Ok(())
}
