// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg};
use seamcarve::dump::energy_to_image;
use seamcarve::{seamcarve, EnergyField};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("carve: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), failure::Error> {
    let matches = App::new("carve")
        .version("0.1.0")
        .about("Content-aware image resizing")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the grayscale energy map instead of carving"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();
    let picture = image::open(input)?.to_rgb8();

    if matches.is_present("energy") {
        let field = EnergyField::from_picture(&picture);
        energy_to_image(&field).save(output)?;
        return Ok(());
    }

    let (width, height) = picture.dimensions();
    let new_width = match matches.value_of("width") {
        Some(s) => s.parse()?,
        None => width,
    };
    let new_height = match matches.value_of("height") {
        Some(s) => s.parse()?,
        None => height,
    };

    let carved = seamcarve(&picture, new_width, new_height)?;
    carved.save(output)?;
    Ok(())
}
