//! CSS color and linear-gradient parsing
//!
//! # Supported Syntax
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Functions: `rgb(r, g, b)`, `rgba(r, g, b, a)` and the space separated
//!   `rgb(r g b / a)` form. Channels are 0-255 numbers or percentages, alpha
//!   is a 0-1 fraction or a percentage. Out-of-range values are clamped.
//! - The CSS named colors and `transparent`
//! - `linear-gradient(<angle>?, <color> <position>%?, ...)`
//!
//! Color parsing is built from nom combinators and must consume the whole
//! input (surrounding whitespace aside).

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, opt},
    error::{Error as NomError, ErrorKind},
    number::complete::double,
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::color::Color;
use crate::error::ColorError;
use crate::gradient::{LinearColorStop, LinearGradient};

type ParseResult<'a, O> = IResult<&'a str, O>;

/// Angle used when a gradient does not specify one (`to bottom`)
pub const DEFAULT_GRADIENT_ANGLE: f64 = 180.0;

// ============================================================================
// Color Parsing
// ============================================================================

/// Parse a CSS color string
pub fn parse_color(input: &str) -> Result<Color, ColorError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorError::Empty);
    }

    if input.starts_with('#') {
        return all_consuming(hex_color)(input)
            .map(|(_, color)| color)
            .map_err(|_| syntax_error(input));
    }

    if let Ok((_, color)) = all_consuming(rgb_function)(input) {
        return Ok(color);
    }

    if input.chars().all(|c| c.is_ascii_alphabetic()) {
        return named_color(input).ok_or_else(|| ColorError::UnknownName {
            name: input.to_string(),
        });
    }

    Err(syntax_error(input))
}

fn syntax_error(input: &str) -> ColorError {
    ColorError::Syntax {
        input: input.to_string(),
    }
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
fn hex_color(input: &str) -> ParseResult<'_, Color> {
    let (rest, digits) = preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit()))(input)?;
    let digits = digits.as_bytes();

    let short = |i: usize| hex_value(digits[i]) * 17;
    let long = |i: usize| hex_value(digits[i]) * 16 + hex_value(digits[i + 1]);

    let color = match digits.len() {
        3 => Color::rgb(short(0), short(1), short(2)),
        4 => Color::rgba(short(0), short(1), short(2), short(3)),
        6 => Color::rgb(long(0), long(2), long(4)),
        8 => Color::rgba(long(0), long(2), long(4), long(6)),
        _ => return Err(nom::Err::Error(NomError::new(input, ErrorKind::LengthValue))),
    };

    Ok((rest, color))
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// `rgb(...)` / `rgba(...)`, comma or space separated
fn rgb_function(input: &str) -> ParseResult<'_, Color> {
    let (input, _) = alt((tag_no_case("rgba"), tag_no_case("rgb")))(input)?;
    let (input, _) = preceded(multispace0, char('('))(input)?;
    let (input, channels) = alt((comma_arguments, space_arguments))(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;

    Ok((input, Color::from_channels(channels)))
}

fn comma_arguments(input: &str) -> ParseResult<'_, [u8; 4]> {
    let (input, red) = preceded(multispace0, channel)(input)?;
    let (input, green) = preceded(comma, channel)(input)?;
    let (input, blue) = preceded(comma, channel)(input)?;
    let (input, alpha) = opt(preceded(comma, alpha))(input)?;

    Ok((input, [red, green, blue, alpha.unwrap_or(255)]))
}

fn space_arguments(input: &str) -> ParseResult<'_, [u8; 4]> {
    let (input, red) = preceded(multispace0, channel)(input)?;
    let (input, green) = preceded(multispace1, channel)(input)?;
    let (input, blue) = preceded(multispace1, channel)(input)?;
    let (input, alpha) = opt(preceded(
        delimited(multispace0, char('/'), multispace0),
        alpha,
    ))(input)?;

    Ok((input, [red, green, blue, alpha.unwrap_or(255)]))
}

fn comma(input: &str) -> ParseResult<'_, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

/// A finite number. `nan`, `inf` and overflowing literals are a hard
/// failure so that no enclosing `alt` retries them as something else.
fn finite_number(input: &str) -> ParseResult<'_, f64> {
    let (rest, value) = double(input)?;
    if !value.is_finite() {
        return Err(nom::Err::Failure(NomError::new(input, ErrorKind::Float)));
    }
    Ok((rest, value))
}

/// A number with an optional `%` suffix
fn number_or_percentage(input: &str) -> ParseResult<'_, (f64, bool)> {
    pair(finite_number, map(opt(char('%')), |percent| percent.is_some()))(input)
}

/// Color channel: `0..=255` or `0%..=100%`
fn channel(input: &str) -> ParseResult<'_, u8> {
    map(number_or_percentage, |(value, percent)| {
        let value = if percent { value * 255.0 / 100.0 } else { value };
        to_byte(value)
    })(input)
}

/// Alpha channel: `0..=1` or `0%..=100%`, stored on the 0-255 scale
fn alpha(input: &str) -> ParseResult<'_, u8> {
    map(number_or_percentage, |(value, percent)| {
        let fraction = if percent { value / 100.0 } else { value };
        to_byte(fraction.clamp(0.0, 1.0) * 255.0)
    })(input)
}

fn to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 255.0) + 0.5).floor() as u8
}

/// Look up a CSS named color (case-insensitive)
pub fn named_color(name: &str) -> Option<Color> {
    if name.eq_ignore_ascii_case("transparent") {
        return Some(Color::TRANSPARENT);
    }

    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, hex)| Color::from_hex(hex))
}

const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

// ============================================================================
// Gradient Parsing
// ============================================================================

/// Parse a CSS `linear-gradient()` into its external (string color) form
///
/// Syntax:
/// - `linear-gradient(135deg, #667eea 0%, #764ba2 100%)`
/// - `linear-gradient(to right, red, blue)`
/// - `linear-gradient(red 0%, yellow 50%, green 100%)`
///
/// Stop colors are kept as written; they are parsed when a motion resolves
/// the gradient.
pub fn parse_linear_gradient(input: &str) -> Result<LinearGradient<String>, ColorError> {
    let input = input.trim();
    let error = |reason: &str| ColorError::Gradient {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (body, _) = preceded(
        tag_no_case::<_, _, NomError<&str>>("linear-gradient"),
        preceded(multispace0, char('(')),
    )(input)
    .map_err(|_| error("expected `linear-gradient(`"))?;
    let inner = body
        .strip_suffix(')')
        .ok_or_else(|| error("missing closing parenthesis"))?;

    let parts = split_gradient_parts(inner);
    let Some(first) = parts.first() else {
        return Err(error("no color stops"));
    };

    let (angle, stop_start) = match parse_gradient_direction(first) {
        Direction::Angle(angle) => (angle, 1),
        Direction::Implicit => (DEFAULT_GRADIENT_ANGLE, 0),
        Direction::Invalid => return Err(error("unrecognized direction")),
    };

    let stops = &parts[stop_start..];
    if stops.len() < 2 {
        return Err(error("at least two color stops are required"));
    }

    let mut colors = Vec::with_capacity(stops.len());
    let mut positions = Vec::with_capacity(stops.len());
    for part in stops {
        let (color, position) =
            split_color_and_position(part).ok_or_else(|| error("invalid color stop position"))?;
        if color.is_empty() {
            return Err(error("color stop without a color"));
        }
        colors.push(color.to_string());
        positions.push(position);
    }

    let positions = distribute_stop_positions(&positions);
    let stop_list = colors
        .into_iter()
        .zip(positions)
        .map(|(color, length_percentage)| LinearColorStop::new(length_percentage, color));

    Ok(LinearGradient::new(angle, stop_list))
}

/// Split gradient arguments by commas, respecting parentheses for rgb()/rgba()
fn split_gradient_parts(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(input[start..].trim());
    parts.retain(|part| !part.is_empty());

    parts
}

enum Direction {
    Angle(f64),
    /// First argument is already a color stop
    Implicit,
    Invalid,
}

fn parse_gradient_direction(first: &str) -> Direction {
    match all_consuming(angle)(first) {
        Ok((_, angle)) => return Direction::Angle(angle),
        Err(nom::Err::Failure(_)) => return Direction::Invalid,
        Err(_) => {}
    }

    let lowered = first.to_ascii_lowercase();
    let Some(side) = lowered.strip_prefix("to ") else {
        return Direction::Implicit;
    };

    let words: Vec<&str> = side.split_whitespace().collect();
    let angle = match words.as_slice() {
        ["top"] => 0.0,
        ["right"] => 90.0,
        ["bottom"] => 180.0,
        ["left"] => 270.0,
        ["top", "right"] | ["right", "top"] => 45.0,
        ["bottom", "right"] | ["right", "bottom"] => 135.0,
        ["bottom", "left"] | ["left", "bottom"] => 225.0,
        ["top", "left"] | ["left", "top"] => 315.0,
        _ => return Direction::Invalid,
    };
    Direction::Angle(angle)
}

/// Angle in degrees from `deg`, `grad`, `rad` or `turn`; a bare number is
/// taken as degrees.
fn angle(input: &str) -> ParseResult<'_, f64> {
    let (input, value) = finite_number(input)?;
    let (input, unit) = opt(preceded(
        multispace0,
        alt((
            tag_no_case("deg"),
            tag_no_case("grad"),
            tag_no_case("rad"),
            tag_no_case("turn"),
        )),
    ))(input)?;

    let degrees = match unit.map(str::to_ascii_lowercase).as_deref() {
        Some("grad") => value * 0.9,
        Some("rad") => value.to_degrees(),
        Some("turn") => value * 360.0,
        _ => value,
    };
    Ok((input, degrees))
}

/// Split `"<color> <n>%"` into the color text and its position.
///
/// Returns `None` when a trailing `%` token is present but is not a number.
fn split_color_and_position(part: &str) -> Option<(&str, Option<f64>)> {
    if !part.ends_with('%') {
        return Some((part, None));
    }

    let split = part.rfind(char::is_whitespace)?;
    let (color, position) = part.split_at(split);
    let (_, (value, _)) = all_consuming(preceded(multispace0, number_or_percentage))(position).ok()?;

    Some((color.trim(), Some(value)))
}

/// Fill in missing stop positions: the first defaults to 0%, the last to
/// 100%, and runs of unpositioned stops are spread evenly between their
/// positioned neighbours.
fn distribute_stop_positions(positions: &[Option<f64>]) -> Vec<f64> {
    let last = positions.len().saturating_sub(1);
    let mut resolved: Vec<Option<f64>> = positions.to_vec();
    if let Some(first) = resolved.first_mut() {
        first.get_or_insert(0.0);
    }
    if let Some(end) = resolved.last_mut() {
        end.get_or_insert(100.0);
    }

    let mut anchor = 0;
    for i in 1..=last {
        let Some(to) = resolved[i] else {
            continue;
        };
        let from = resolved[anchor].unwrap_or(0.0);
        let span = (i - anchor) as f64;
        for (step, slot) in resolved[anchor + 1..i].iter_mut().enumerate() {
            *slot = Some(from + (to - from) * (step + 1) as f64 / span);
        }
        anchor = i;
    }

    resolved.into_iter().map(|p| p.unwrap_or(0.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_color("#fff").unwrap(), Color::WHITE);
        assert_eq!(parse_color("#f008").unwrap(), Color::rgba(255, 0, 0, 136));
        assert_eq!(parse_color("#1A2b3C").unwrap(), Color::rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(
            parse_color("#11223344").unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0x44)
        );
    }

    #[test]
    fn test_parse_hex_rejects_bad_length() {
        assert!(matches!(
            parse_color("#12345"),
            Err(ColorError::Syntax { .. })
        ));
        assert!(parse_color("#ggg").is_err());
    }

    #[test]
    fn test_parse_rgb_functions() {
        assert_eq!(
            parse_color("rgb(255, 128, 0)").unwrap(),
            Color::rgb(255, 128, 0)
        );
        assert_eq!(
            parse_color("rgba(255, 0, 0, 0.5)").unwrap(),
            Color::rgba(255, 0, 0, 128)
        );
        assert_eq!(
            parse_color("RGB( 0 , 0 , 255 )").unwrap(),
            Color::BLUE
        );
        assert_eq!(
            parse_color("rgb(100% 0% 0% / 50%)").unwrap(),
            Color::rgba(255, 0, 0, 128)
        );
    }

    #[test]
    fn test_parse_clamps_channels() {
        assert_eq!(
            parse_color("rgba(300, -5, 0, 2)").unwrap(),
            Color::rgb(255, 0, 0)
        );
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("red").unwrap(), Color::RED);
        assert_eq!(parse_color("  RebeccaPurple ").unwrap(), Color::from_hex(0x663399));
        assert_eq!(parse_color("transparent").unwrap(), Color::TRANSPARENT);
        assert_eq!(
            parse_color("blurple"),
            Err(ColorError::UnknownName {
                name: "blurple".to_string()
            })
        );
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert_eq!(parse_color("   "), Err(ColorError::Empty));
        assert!(matches!(
            parse_color("rgb(1, 2)"),
            Err(ColorError::Syntax { .. })
        ));
        assert!(parse_color("#fff trailing").is_err());
    }

    #[test]
    fn test_parse_gradient_with_angle() {
        let gradient =
            parse_linear_gradient("linear-gradient(90deg, #000000 0%, rgba(0, 0, 0, 0.5) 100%)")
                .unwrap();
        assert_eq!(gradient.angle, 90.0);
        assert_eq!(gradient.stop_list.len(), 2);
        assert_eq!(gradient.stop_list[0].color, "#000000");
        assert_eq!(gradient.stop_list[1].color, "rgba(0, 0, 0, 0.5)");
        assert_eq!(gradient.stop_list[1].length_percentage, 100.0);
    }

    #[test]
    fn test_parse_gradient_direction_keywords() {
        let gradient = parse_linear_gradient("linear-gradient(to right, red, blue)").unwrap();
        assert_eq!(gradient.angle, 90.0);

        let gradient = parse_linear_gradient("linear-gradient(red, blue)").unwrap();
        assert_eq!(gradient.angle, DEFAULT_GRADIENT_ANGLE);

        let gradient = parse_linear_gradient("linear-gradient(0.25turn, red, blue)").unwrap();
        assert_eq!(gradient.angle, 90.0);

        assert!(parse_linear_gradient("linear-gradient(to nowhere, red, blue)").is_err());
    }

    #[test]
    fn test_parse_gradient_angle_units() {
        let gradient = parse_linear_gradient("linear-gradient(1rad, red, blue)").unwrap();
        assert!((gradient.angle - 57.2958).abs() < 1e-4);

        let gradient = parse_linear_gradient("linear-gradient(100grad, red, blue)").unwrap();
        assert!((gradient.angle - 90.0).abs() < 1e-9);

        let gradient = parse_linear_gradient("linear-gradient(45, red, blue)").unwrap();
        assert_eq!(gradient.angle, 45.0);
    }

    #[test]
    fn test_parse_rejects_non_finite_numbers() {
        for input in ["rgb(nan, 0, 0)", "rgb(inf, inf, inf)", "rgba(0, 0, 0, NaN)", "rgb(1e999 0 0)"] {
            assert!(
                matches!(parse_color(input), Err(ColorError::Syntax { .. })),
                "{input} should not parse"
            );
        }

        for input in [
            "linear-gradient(nan, red, blue)",
            "linear-gradient(infdeg, red, blue)",
            "linear-gradient(90deg, red nan%, blue)",
            "linear-gradient(90deg, red, blue inf%)",
        ] {
            assert!(
                matches!(parse_linear_gradient(input), Err(ColorError::Gradient { .. })),
                "{input} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_gradient_distributes_positions() {
        let gradient =
            parse_linear_gradient("linear-gradient(red, yellow, green 60%, blue, white)").unwrap();
        let positions: Vec<f64> = gradient
            .stop_list
            .iter()
            .map(|stop| stop.length_percentage)
            .collect();
        assert_eq!(positions, vec![0.0, 30.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_parse_gradient_errors() {
        assert!(parse_linear_gradient("radial-gradient(red, blue)").is_err());
        assert!(parse_linear_gradient("linear-gradient(90deg, red 0%").is_err());
        assert!(parse_linear_gradient("linear-gradient(90deg, red)").is_err());
        assert!(parse_linear_gradient("linear-gradient(red abc%, blue)").is_err());
    }
}
