//! Handle the color theme
use ratatui::style::{Color, Modifier, Style};

use crate::options::ComboboxOptions;

/// The color scheme of the combobox
///
/// <pre>
///        controlling isOpen        --> title
///        [ Toggle isOpen ]         --> button
///        The menu is open          --> status
/// +--------------------------+
/// |query|placeholder        ▴|     --> query/placeholder, control
/// +--------------------------+     --> border
/// |  normal line             |     --> normal & matched
/// |> highlighted line        |     --> cursor & current & current_match
/// |* selected line           |     --> selected
/// +--------------------------+
/// </pre>
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ColorTheme {
    /// Non-highlighted menu rows
    pub normal: Style,
    /// Matched text on non-highlighted rows
    pub matched: Style,
    /// Highlighted row, non-matched text
    pub current: Style,
    /// Highlighted row, matched text
    pub current_match: Style,
    /// Query text
    pub query: Style,
    /// Placeholder shown when the query is empty
    pub placeholder: Style,
    /// Toggle/clear control
    pub control: Style,
    /// Pointer in front of the highlighted row
    pub cursor: Style,
    /// Marker in front of the selected row
    pub selected: Style,
    /// Page title
    pub title: Style,
    /// External toggle button
    pub button: Style,
    /// Open/closed status line
    pub status: Style,
    /// Borders
    pub border: Style,
}

impl ColorTheme {
    /// Setup the theme from the options
    pub fn init_from_options(options: &ComboboxOptions) -> ColorTheme {
        if let Some(color) = options.color.as_deref() {
            ColorTheme::from_options(color)
        } else {
            // Check for NO_COLOR environment variable
            match std::env::var_os("NO_COLOR") {
                Some(no_color) if !no_color.is_empty() => ColorTheme::none(),
                _ => ColorTheme::dark256(),
            }
        }
    }

    fn none() -> Self {
        Self {
            placeholder: Style::default().dim(),
            title: Style::default().bold(),
            status: Style::default().bold(),
            button: Style::default().reversed(),
            current: Style::default().reversed(),
            ..ColorTheme::default()
        }
    }

    fn bw() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            matched: base.matched.underlined(),
            current_match: base.current.underlined(),
            ..base
        }
    }

    fn default16() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            matched: base.matched.fg(Color::Green),
            current: Style::default().fg(Color::Yellow),
            current_match: base.current_match.fg(Color::Green),
            control: base.control.fg(Color::Blue),
            cursor: base.cursor.fg(Color::Red),
            selected: base.selected.fg(Color::Magenta),
            title: base.title.fg(Color::Cyan),
            border: base.border.fg(Color::Black),
            ..base
        }
    }

    fn dark256() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            matched: base.matched.fg(Color::Indexed(108)),
            current: Style::default().bg(Color::Indexed(236)),
            current_match: base.current_match.fg(Color::Indexed(151)).bg(Color::Indexed(236)),
            query: base.query.fg(Color::Indexed(252)),
            control: base.control.fg(Color::Indexed(110)),
            cursor: base.cursor.fg(Color::Indexed(161)),
            selected: base.selected.fg(Color::Indexed(168)),
            title: base.title.fg(Color::Indexed(109)),
            button: Style::default().fg(Color::Indexed(0)).bg(Color::Indexed(110)),
            status: base.status.fg(Color::Indexed(144)),
            border: base.border.fg(Color::Indexed(59)),
            ..base
        }
    }

    fn light256() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            matched: base.matched.fg(Color::Indexed(0)).bg(Color::Indexed(220)),
            current: Style::default().bg(Color::Indexed(251)),
            current_match: base.current_match.fg(Color::Indexed(66)).bg(Color::Indexed(251)),
            control: base.control.fg(Color::Indexed(25)),
            cursor: base.cursor.fg(Color::Indexed(161)),
            selected: base.selected.fg(Color::Indexed(168)),
            title: base.title.fg(Color::Indexed(31)),
            button: Style::default().fg(Color::Indexed(231)).bg(Color::Indexed(25)),
            status: base.status.fg(Color::Indexed(101)),
            border: base.border.fg(Color::Indexed(145)),
            ..base
        }
    }

    fn set_color(&mut self, name: &str, spec: &str) {
        let spec_parts: Vec<_> = spec.split(['+', ':']).collect();

        let raw_color = spec_parts[0];
        let new_color = if raw_color.len() == 7 && raw_color.starts_with('#') {
            // RGB Hex color
            let r = u8::from_str_radix(&raw_color[1..3], 16).unwrap_or(255);
            let g = u8::from_str_radix(&raw_color[3..5], 16).unwrap_or(255);
            let b = u8::from_str_radix(&raw_color[5..7], 16).unwrap_or(255);
            Some(Color::Rgb(r, g, b))
        } else {
            raw_color.parse::<u8>().ok().map(Color::Indexed).or_else(|| {
                debug!("Unknown color '{raw_color}'");
                None
            })
        };

        let mut modifier = Modifier::empty();
        for part in spec_parts.iter().skip(1) {
            modifier |= match *part {
                "b" | "bold" => Modifier::BOLD,
                "u" | "underlined" => Modifier::UNDERLINED,
                "d" | "dim" => Modifier::DIM,
                "i" | "italic" => Modifier::ITALIC,
                "r" | "reverse" => Modifier::REVERSED,
                m => {
                    debug!("Unknown modifier '{m}'");
                    Modifier::empty()
                }
            };
        }

        let (component, layer) = if let Some(c) = name.strip_suffix("_bg").or_else(|| name.strip_suffix("-bg")) {
            (c, "bg")
        } else if let Some(c) = name.strip_suffix("_fg").or_else(|| name.strip_suffix("-fg")) {
            (c, "fg")
        } else {
            (name, "fg")
        };

        let target = match component {
            "" | "normal" => &mut self.normal,
            "matched" | "hl" => &mut self.matched,
            "current" | "fg+" => &mut self.current,
            "current_match" | "hl+" => &mut self.current_match,
            "query" => &mut self.query,
            "placeholder" => &mut self.placeholder,
            "control" => &mut self.control,
            "cursor" | "pointer" => &mut self.cursor,
            "selected" | "marker" => &mut self.selected,
            "title" | "header" => &mut self.title,
            "button" => &mut self.button,
            "status" | "info" => &mut self.status,
            "border" => &mut self.border,
            other => {
                debug!("Unknown theme component '{other}'");
                return;
            }
        };
        set_style(target, layer, new_color, modifier);
    }

    /// Builds a theme from a `--color` value: a base theme name and/or
    /// comma-separated `component:color[:modifier...]` pairs
    pub fn from_options(color: &str) -> Self {
        let mut theme = ColorTheme::dark256();
        for pair in color.split(',') {
            if let Some((name, spec)) = pair.split_once(':') {
                theme.set_color(name, spec);
            } else {
                theme = match pair {
                    "light" => ColorTheme::light256(),
                    "16" => ColorTheme::default16(),
                    "bw" => ColorTheme::bw(),
                    "none" | "empty" => ColorTheme::none(),
                    "dark" | "default" => ColorTheme::dark256(),
                    t => {
                        debug!("Unknown color theme '{t}'");
                        ColorTheme::dark256()
                    }
                };
            }
        }
        theme
    }
}

fn set_style(s: &mut Style, layer: &str, color: Option<Color>, modifier: Modifier) {
    if let Some(c) = color {
        *s = match layer {
            "bg" => s.bg(c),
            _ => s.fg(c),
        }
    }
    *s = s.add_modifier(modifier);
}
