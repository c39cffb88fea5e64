//! Configuration options for the combobox.
//!
//! This module provides the `ComboboxOptions` struct and its builder, parsed from the
//! command line when the `cli` feature is enabled.

use derive_builder::Builder;

use crate::binds::KeyMap;

/// Placeholder shown in the input while the query is empty
pub const DEFAULT_PLACEHOLDER: &str = "Find a Star Wars character";

/// combobox - a searchable, keyboard-accessible dropdown
///
/// Type to filter the list of characters, move with the arrows, select with enter.
#[derive(Builder, Debug, Clone)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "combobox", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct ComboboxOptions {
    //  --- Search ---
    /// Start with the given query
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Search"))]
    pub query: Option<String>,

    /// Filter mode: print the names matching the query and exit
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Search"))]
    pub filter: Option<String>,

    //  --- Interface ---
    /// Comma separated list of bindings
    ///
    /// Each binding follows the format `<key>:<action>`, actions can be chained with `+`.
    ///
    /// **Example**: `combobox --bind 'ctrl-j:down,ctrl-k:up,f2:toggle-is-open'`
    #[cfg_attr(
        feature = "cli",
        arg(short, long, help_heading = "Interface", verbatim_doc_comment)
    )]
    pub bind: Vec<String>,

    /// Disable mouse
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Interface"))]
    pub no_mouse: bool,

    //  --- Layout ---
    /// Height of the interface, as a number of lines or a percentage of the terminal
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "100%", help_heading = "Layout")
    )]
    pub height: String,

    /// Width of the combobox, in cells
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 40, help_heading = "Layout"))]
    pub width: u16,

    /// Maximum number of menu rows shown at once
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 10, help_heading = "Layout"))]
    pub menu_height: u16,

    /// Text shown in the input while the query is empty
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = DEFAULT_PLACEHOLDER, help_heading = "Layout")
    )]
    pub placeholder: String,

    //  --- Display ---
    /// Color configuration
    ///
    /// Either a base theme (dark, light, 16, bw, none) and/or a comma separated list of
    /// `component:color[:modifier]`, colors being ANSI 256 indices or `#rrggbb`.
    ///
    /// **Example**: `combobox --color light,matched:#ff0000:bold`
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Display", verbatim_doc_comment))]
    pub color: Option<String>,

    //  --- Scripting ---
    /// Print the query as the first line of the output
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub print_query: bool,

    /// The internal (parsed) keymap
    #[cfg_attr(feature = "cli", clap(skip))]
    pub keymap: KeyMap,
}

impl Default for ComboboxOptions {
    fn default() -> Self {
        Self {
            query: None,
            filter: None,
            bind: Vec::new(),
            no_mouse: false,
            height: String::from("100%"),
            width: 40,
            menu_height: 10,
            placeholder: String::from(DEFAULT_PLACEHOLDER),
            color: None,
            print_query: false,
            keymap: KeyMap::default(),
        }
    }
}

impl ComboboxOptionsBuilder {
    /// Builds the ComboboxOptions from the builder
    pub fn build(&mut self) -> Result<ComboboxOptions, ComboboxOptionsBuilderError> {
        self.final_build().map(|opts| opts.build())
    }
}

impl ComboboxOptions {
    /// Finalizes the options by parsing the key bindings
    pub fn build(mut self) -> Self {
        self.keymap = self.bind.iter().fold(KeyMap::default(), |mut res, part| {
            res.add_keymaps(part.split(','));
            res
        });
        self
    }
}
