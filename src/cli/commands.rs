//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: print the filtered catalog
//! - show: full record for one tool
//! - suggest: search suggestions for a partial query
//! - fav: manage the favorite set
//! - theme / lang: read or set view settings

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolshelf - a terminal catalog browser for software tools
#[derive(Parser, Debug)]
#[command(name = "toolshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog tools, optionally filtered
    List {
        /// Substring to match against tool names (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category filter
        // -c belongs to the global config flag
        #[arg(long)]
        category: Option<String>,

        /// Platform membership filter
        #[arg(short, long)]
        platform: Option<String>,

        /// Exact developer filter
        #[arg(short, long)]
        developer: Option<String>,

        /// Show only favorited tools
        #[arg(short, long)]
        favorites: bool,
    },

    /// Show full details for one tool
    Show {
        /// Tool id to show
        id: String,
    },

    /// Print up to 5 name suggestions for a partial query
    Suggest {
        /// Partial tool name (at least 2 characters)
        query: String,
    },

    /// Manage the favorite set
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },

    /// Get or set the theme (dark, light)
    Theme {
        /// New theme; prints the current one when omitted
        value: Option<String>,
    },

    /// Get or set the language (de, en)
    Lang {
        /// New language; prints the current one when omitted
        value: Option<String>,
    },
}

/// Favorite management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum FavCommands {
    /// Add a tool to favorites
    Add {
        /// Tool id to favorite
        id: String,
    },

    /// Remove a tool from favorites
    Remove {
        /// Tool id to unfavorite
        id: String,
    },

    /// List favorited tool ids
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (TUI mode)
        let cli = Cli::try_parse_from(["toolshelf"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["toolshelf", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["toolshelf", "-c", "/path/to/toolshelf.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/toolshelf.yml")));
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::try_parse_from(["toolshelf", "list"]).unwrap();
        match cli.command {
            Some(Commands::List {
                search,
                category,
                platform,
                developer,
                favorites,
            }) => {
                assert!(search.is_none());
                assert!(category.is_none());
                assert!(platform.is_none());
                assert!(developer.is_none());
                assert!(!favorites);
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_list_with_filters() {
        let cli = Cli::try_parse_from(["toolshelf", "list", "-s", "al", "--category", "Notes", "-f"]).unwrap();
        match cli.command {
            Some(Commands::List {
                search,
                category,
                favorites,
                ..
            }) => {
                assert_eq!(search, Some("al".to_string()));
                assert_eq!(category, Some("Notes".to_string()));
                assert!(favorites);
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_show_command() {
        let cli = Cli::try_parse_from(["toolshelf", "show", "obsidian"]).unwrap();
        match cli.command {
            Some(Commands::Show { id }) => assert_eq!(id, "obsidian"),
            _ => panic!("Expected show command"),
        }
    }

    #[test]
    fn test_suggest_command() {
        let cli = Cli::try_parse_from(["toolshelf", "suggest", "ob"]).unwrap();
        match cli.command {
            Some(Commands::Suggest { query }) => assert_eq!(query, "ob"),
            _ => panic!("Expected suggest command"),
        }
    }

    #[test]
    fn test_fav_add() {
        let cli = Cli::try_parse_from(["toolshelf", "fav", "add", "obsidian"]).unwrap();
        match cli.command {
            Some(Commands::Fav {
                command: FavCommands::Add { id },
            }) => assert_eq!(id, "obsidian"),
            _ => panic!("Expected fav add command"),
        }
    }

    #[test]
    fn test_fav_remove() {
        let cli = Cli::try_parse_from(["toolshelf", "fav", "remove", "obsidian"]).unwrap();
        match cli.command {
            Some(Commands::Fav {
                command: FavCommands::Remove { id },
            }) => assert_eq!(id, "obsidian"),
            _ => panic!("Expected fav remove command"),
        }
    }

    #[test]
    fn test_fav_list() {
        let cli = Cli::try_parse_from(["toolshelf", "fav", "list"]).unwrap();
        match cli.command {
            Some(Commands::Fav {
                command: FavCommands::List,
            }) => {}
            _ => panic!("Expected fav list command"),
        }
    }

    #[test]
    fn test_theme_get_and_set() {
        let cli = Cli::try_parse_from(["toolshelf", "theme"]).unwrap();
        match cli.command {
            Some(Commands::Theme { value }) => assert!(value.is_none()),
            _ => panic!("Expected theme command"),
        }

        let cli = Cli::try_parse_from(["toolshelf", "theme", "light"]).unwrap();
        match cli.command {
            Some(Commands::Theme { value }) => assert_eq!(value, Some("light".to_string())),
            _ => panic!("Expected theme command"),
        }
    }

    #[test]
    fn test_lang_set() {
        let cli = Cli::try_parse_from(["toolshelf", "lang", "en"]).unwrap();
        match cli.command {
            Some(Commands::Lang { value }) => assert_eq!(value, Some("en".to_string())),
            _ => panic!("Expected lang command"),
        }
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["toolshelf", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
