use bubbler::{ArrowDirection, BubbleConfig, Size, SvgOptions};
use camino::Utf8PathBuf;
use std::fs;

const POSITIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [OUT]   Render every arrow direction and position to HTML");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(args.get(2).map(Utf8PathBuf::from)),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn gallery(output: Option<Utf8PathBuf>) {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let output_path = output.unwrap_or_else(|| manifest_dir.join("../target/bubble-gallery.html"));

    let size = Size::new(180.0, 100.0);
    let options = SvgOptions {
        fill: "rgb(255,250,230)".to_string(),
        ..SvgOptions::default()
    };

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Bubble Gallery</title>
    <style>
        body {
            font-family: system-ui, sans-serif;
            margin: 24px;
            background: #eee;
            color: #333;
        }
        .row {
            display: flex;
            gap: 16px;
            margin-bottom: 24px;
        }
        .cell {
            background: #fff;
            border-radius: 4px;
            padding: 8px;
        }
        .cell-title {
            font-size: 12px;
            margin-bottom: 4px;
        }
        .error {
            color: #b00;
            font-family: monospace;
        }
    </style>
</head>
<body>
<h1>Bubble Gallery</h1>
"#,
    );

    for direction in ArrowDirection::ALL {
        eprintln!("Rendering {direction}...");
        html.push_str(&format!("<h2>{direction}</h2>\n<div class=\"row\">\n"));
        for position in POSITIONS {
            let config = BubbleConfig::new()
                .with_corner_radius(10.0)
                .with_arrow_radius(2.0)
                .with_arrow_height(14.0)
                .with_arrow_width(18.0)
                .with_arrow_direction(direction)
                .with_arrow_position(position);
            let content = match bubbler::layer(size, &config).and_then(|shape| shape.to_svg(&options)) {
                Ok(svg) => svg,
                Err(e) => format!(r#"<div class="error">{}</div>"#, html_escape(&e.to_string())),
            };
            html.push_str(&format!(
                "<div class=\"cell\"><div class=\"cell-title\">position {position}</div>{content}</div>\n"
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body></html>\n");

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create output directory");
    }
    fs::write(&output_path, html).expect("Failed to write HTML");
    println!("Generated gallery at: {output_path}");
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
