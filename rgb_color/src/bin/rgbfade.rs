// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Print colors and fades in the terminal. Eg:
//! - `rgbfade show "#ff0009" fba`
//! - `rgbfade fade --from "#ff0000" --to "#00ff00" --to "#0000ff" "Hello, World!"`
//! - `rgbfade fade --from 000 --to fff --steps 5 "Hello"`
//! - `rgbfade --color ansi256 --log /tmp/rgbfade.log show 14f400`

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_rgb_color::{ColorSupport, RgbColor, TracingConfig, global_color_support,
                     try_initialize_logging_global};

#[derive(Debug, Parser)]
#[command(bin_name = "rgbfade")]
#[command(about = "🎨 Print hex colors and multi stop fades in your terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "Which escape sequences to emit; `auto` examines the terminal"
    )]
    pub color: ColorChoice,

    #[arg(
        global = true,
        long,
        value_name = "FILE",
        help = "Log debug output to this file"
    )]
    pub log: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Truecolor,
    Ansi256,
    Grayscale,
    #[value(name = "none")]
    NoColor,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🖍 Print a swatch for each color\n💡 Eg: `rgbfade show \"#ff0009\" fba`")]
    Show {
        #[arg(
            value_name = "HEX",
            required = true,
            help = "3 or 6 hex digits, w/ an optional `#` prefix or `0x` suffix"
        )]
        colors: Vec<RgbColor>,
    },

    #[clap(
        about = "🌈 Print text that fades from one color through one or more others\n💡 Eg: `rgbfade fade --from f00 --to 0f0 --to 00f \"Hello\"`"
    )]
    Fade {
        #[arg(long, value_name = "HEX", help = "Starting color")]
        from: RgbColor,

        #[arg(
            long,
            value_name = "HEX",
            required = true,
            help = "Color to fade to; repeat to add more stops"
        )]
        to: Vec<RgbColor>,

        #[arg(
            long,
            value_name = "N",
            help = "Print the text on N lines, one color per line, instead of fading \
                    across its characters"
        )]
        steps: Option<u16>,

        text: String,
    },
}

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    if let Some(log_file) = &cli_arg.global_options.log {
        try_initialize_logging_global(TracingConfig::new_file(Some(log_file.clone())))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    apply_color_choice(cli_arg.global_options.color);
    run_command(&cli_arg.command);

    Ok(())
}

fn apply_color_choice(color_choice: ColorChoice) {
    match color_choice {
        ColorChoice::Auto => global_color_support::clear_override(),
        ColorChoice::Truecolor => {
            global_color_support::set_override(ColorSupport::Truecolor);
        }
        ColorChoice::Ansi256 => global_color_support::set_override(ColorSupport::Ansi256),
        ColorChoice::Grayscale => {
            global_color_support::set_override(ColorSupport::Grayscale);
        }
        ColorChoice::NoColor => global_color_support::set_override(ColorSupport::NoColor),
    }
}

fn run_command(command: &CLICommand) {
    match command {
        CLICommand::Show { colors } => show(colors),
        CLICommand::Fade {
            from,
            to,
            steps,
            text,
        } => match steps {
            Some(steps) => fade_lines(*from, to, *steps, text),
            None => fade_chars(*from, to, text),
        },
    }
}

fn show(colors: &[RgbColor]) {
    for color in colors {
        let (red, green, blue) = color.values();
        color.printfln(format_args!(
            "██ {color} rgb({red}, {green}, {blue}) ansi256({})",
            color.as_ansi().index
        ));
    }
}

fn fade_lines(from: RgbColor, to: &[RgbColor], steps: u16, text: &str) {
    for color in from.fade_steps(steps, to) {
        color.println(text);
    }
}

/// Each char gets its own fade position, so there is no upper bound on the length of
/// `text`.
#[allow(clippy::cast_precision_loss)]
fn fade_chars(from: RgbColor, to: &[RgbColor], text: &str) {
    let char_count = text.chars().count();
    let last_index = char_count.saturating_sub(1);
    let max = last_index as f32;

    for (index, ch) in text.chars().enumerate() {
        let color = from.fade(0.0, max, index as f32, to);
        if index == last_index {
            color.println(ch);
        } else {
            color.print(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use r3bl_rgb_color::{OutputDevice, OutputDeviceExt, assert_eq2, global_output_device};
    use serial_test::serial;

    use super::*;

    fn capture_output(f: impl FnOnce()) -> String {
        let (device, mock) = OutputDevice::new_mock();
        global_output_device::set_override(device);
        apply_color_choice(ColorChoice::Truecolor);

        f();

        apply_color_choice(ColorChoice::Auto);
        global_output_device::clear_override();
        mock.get_copy_of_buffer_as_string()
    }

    #[test]
    fn test_cli_definition_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_parse_show() {
        let cli_arg =
            CLIArg::try_parse_from(["rgbfade", "--color", "none", "show", "#ff0009", "fba"])
                .unwrap();
        assert_eq2!(cli_arg.global_options.color, ColorChoice::NoColor);
        assert_eq2!(cli_arg.global_options.log, None);
        match cli_arg.command {
            CLICommand::Show { colors } => assert_eq2!(
                colors,
                vec![RgbColor::new(255, 0, 9), RgbColor::new(255, 187, 170)]
            ),
            CLICommand::Fade { .. } => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_show_rejects_bad_hex() {
        assert!(CLIArg::try_parse_from(["rgbfade", "show", "faba"]).is_err());
        assert!(CLIArg::try_parse_from(["rgbfade", "show"]).is_err());
    }

    #[test]
    fn test_parse_fade() {
        let cli_arg = CLIArg::try_parse_from([
            "rgbfade", "fade", "--from", "f00", "--to", "0f0", "--to", "00f", "--steps",
            "3", "hello", "--log", "out.log",
        ])
        .unwrap();
        assert_eq2!(cli_arg.global_options.log, Some("out.log".to_string()));
        match cli_arg.command {
            CLICommand::Fade {
                from,
                to,
                steps,
                text,
            } => {
                assert_eq2!(from, RgbColor::new(255, 0, 0));
                assert_eq2!(to, vec![RgbColor::new(0, 255, 0), RgbColor::new(0, 0, 255)]);
                assert_eq2!(steps, Some(3));
                assert_eq2!(text, "hello");
            }
            CLICommand::Show { .. } => panic!("expected fade"),
        }
    }

    #[serial]
    #[test]
    fn test_show_output() {
        let it = capture_output(|| show(&[RgbColor::new(255, 0, 9)]));
        assert_eq2!(
            it,
            "\x1b[38;2;255;0;9m██ #ff0009 rgb(255, 0, 9) ansi256(196)\x1b[0m\n"
        );
    }

    #[serial]
    #[test]
    fn test_fade_lines_output() {
        let black = RgbColor::new(0, 0, 0);
        let white = RgbColor::new(255, 255, 255);
        let it = capture_output(|| fade_lines(black, &[white], 3, "hi"));
        assert_eq2!(
            it,
            [
                "\x1b[38;2;0;0;0mhi\x1b[0m\n",
                "\x1b[38;2;127;127;127mhi\x1b[0m\n",
                "\x1b[38;2;255;255;255mhi\x1b[0m\n",
            ]
            .concat()
        );
    }

    #[serial]
    #[test]
    fn test_fade_chars_output() {
        let black = RgbColor::new(0, 0, 0);
        let white = RgbColor::new(255, 255, 255);
        let it = capture_output(|| fade_chars(black, &[white], "abc"));
        assert_eq2!(
            it,
            [
                "\x1b[38;2;0;0;0ma\x1b[0m",
                "\x1b[38;2;127;127;127mb\x1b[0m",
                "\x1b[38;2;255;255;255mc\x1b[0m\n",
            ]
            .concat()
        );

        let it = capture_output(|| fade_chars(black, &[white], ""));
        assert_eq2!(it, "");
    }

    #[serial]
    #[test]
    fn test_fade_chars_output_longer_than_u16() {
        let text = "a".repeat(70_000);
        apply_color_choice(ColorChoice::NoColor);
        let (device, mock) = OutputDevice::new_mock();
        global_output_device::set_override(device);

        fade_chars(RgbColor::new(0, 0, 0), &[RgbColor::new(255, 255, 255)], &text);

        global_output_device::clear_override();
        apply_color_choice(ColorChoice::Auto);
        assert_eq2!(mock.get_copy_of_buffer_as_string(), format!("{text}\n"));
    }
}
