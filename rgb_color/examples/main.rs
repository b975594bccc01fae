// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_rgb_color::{ColorSupport, RgbColor, global_color_support, global_output_device,
                     rgb_color};

fn main() {
    let start = rgb_color!(lizard_green);
    let stops = [rgb_color!(frozen_blue), rgb_color!(hot_pink)];

    // Fade a block of lines in each color mode.
    for color_support in [
        ColorSupport::Truecolor,
        ColorSupport::Ansi256,
        ColorSupport::Grayscale,
        ColorSupport::NoColor,
    ] {
        global_color_support::set_override(color_support);
        start.printfln(format_args!(
            "> Force color mode ({:?})",
            global_color_support::detect()
        ));
        for (line, color) in start.fade_steps(5, &stops).iter().enumerate() {
            color.println(format!("{line}: {color}"));
        }
    }
    global_color_support::clear_override();

    // Hex input.
    for input in ["#ff0009", "fba", "ff00090x", "faba"] {
        match RgbColor::try_from_hex(input) {
            Ok(color) => {
                color.println(format!("{input:>10} -> {color}"));
            }
            Err(error) => {
                rgb_color!(guards_red).print_on_errorf(&Err::<(), _>(error), |error| {
                    format!("{input:>10} -> {error}")
                });
            }
        }
    }

    // Nothing is printed when output is disabled.
    global_output_device::disable_output();
    start.println("You won't see this");
    global_output_device::enable_output();
    start.println("Done!");
}
