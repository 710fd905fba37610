use clap::{App, Arg, SubCommand};
use fontawesome_glyphs::{
    codes, AssetLocator, FontRegistrar, Icon, IconStyle, Rgba,
    SystemFontHost,
};
use std::fs;
use std::path::PathBuf;

//===========================================================================//

fn main() {
    env_logger::init();
    let matches = App::new("fa_icon")
        .version("0.1")
        .about("Looks up and renders FontAwesome icons")
        .subcommand(
            SubCommand::with_name("list")
                .about("Lists icon codes and their code points")
                .arg(Arg::with_name("filter").help("Only list matching codes")),
        )
        .subcommand(
            SubCommand::with_name("render")
                .about("Renders an icon to a PNG file")
                .arg(
                    Arg::with_name("output")
                        .takes_value(true)
                        .value_name("PATH")
                        .short("o")
                        .long("output")
                        .help("Sets output path"),
                )
                .arg(
                    Arg::with_name("width")
                        .takes_value(true)
                        .value_name("PIXELS")
                        .short("W")
                        .long("width")
                        .default_value("64"),
                )
                .arg(
                    Arg::with_name("height")
                        .takes_value(true)
                        .value_name("PIXELS")
                        .short("H")
                        .long("height")
                        .default_value("64"),
                )
                .arg(
                    Arg::with_name("color")
                        .takes_value(true)
                        .value_name("COLOR")
                        .short("c")
                        .long("color")
                        .default_value("#000000"),
                )
                .arg(
                    Arg::with_name("background")
                        .takes_value(true)
                        .value_name("COLOR")
                        .short("b")
                        .long("background"),
                )
                .arg(
                    Arg::with_name("font-dir")
                        .takes_value(true)
                        .value_name("DIR")
                        .short("d")
                        .long("font-dir")
                        .help("Adds a directory to search for FontAwesome.otf"),
                )
                .arg(Arg::with_name("icon").required(true)),
        )
        .get_matches();
    if let Some(submatches) = matches.subcommand_matches("list") {
        let filter = submatches.value_of("filter").unwrap_or("");
        for (code, icon) in codes() {
            if code.contains(filter) {
                println!("{:40} U+{:04X}  {:?}", code, icon.code_point(), icon);
            }
        }
    } else if let Some(submatches) = matches.subcommand_matches("render") {
        let name = submatches.value_of("icon").unwrap();
        let icon: Icon = name.parse().unwrap();
        let width = submatches.value_of("width").unwrap();
        let width = width.parse::<u32>().unwrap();
        let height = submatches.value_of("height").unwrap();
        let height = height.parse::<u32>().unwrap();
        let color = submatches.value_of("color").unwrap();
        let color = color.parse::<Rgba>().unwrap();
        let mut style = IconStyle::new(color);
        if let Some(background) = submatches.value_of("background") {
            style = style.with_background(background.parse().unwrap());
        }
        let mut locator = AssetLocator::from_env();
        if let Some(dir) = submatches.value_of("font-dir") {
            locator = locator.with_dir(dir);
        }
        let registrar =
            FontRegistrar::new(SystemFontHost::with_system_fonts(), locator);
        let image = fontawesome_glyphs::render::render_icon(
            &registrar, icon, &style, width, height,
        )
        .unwrap();
        let out_path = if let Some(path) = submatches.value_of("output") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.png", icon.name()))
        };
        println!("Writing {:?} ({}x{})", out_path, width, height);
        let out_file = fs::File::create(out_path).unwrap();
        image.write_png(out_file).unwrap();
    }
}

//===========================================================================//
