//! Output Rendering
//!
//! Human-readable summaries for the CLI. In `--json` mode the event stream
//! replaces these.

use std::fmt::Write as _;
use std::path::Path;

use crate::application::{DeployResult, ResetResult, WalkOutcome};
use crate::domain::value_objects::{DirectoryRole, Target};

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            skip: "[ ]",
        }
    }
}

/// Text renderer for command results
pub struct TextRenderer {
    pub unicode: bool,
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    pub fn render_deploy(&self, result: &DeployResult, project_root: &Path) -> String {
        let icons = self.icons();
        let mut out = String::new();

        let title = if result.dry_run {
            "Deploy Preview (dry run)"
        } else if result.uploaded.is_empty() {
            "Already Up-to-date"
        } else {
            "Deploy Complete"
        };
        let _ = writeln!(out, "{} {}", icons.check, title);
        let _ = writeln!(out);
        let _ = writeln!(out, "  Project: {}", project_root.display());

        for target in Target::ALL {
            let uploaded: Vec<_> = result.uploaded_to(target).collect();
            if uploaded.is_empty() {
                continue;
            }
            let _ = writeln!(
                out,
                "  {} ({} modules):",
                capitalize(target.as_str()),
                uploaded.len()
            );
            for module in uploaded {
                let _ = writeln!(out, "    {} {}", icons.write, module.uri);
            }
        }

        if !result.entity_documents.is_empty() {
            let _ = writeln!(out, "  Entity models ({}):", result.entity_documents.len());
            for uri in &result.entity_documents {
                let _ = writeln!(out, "    {} {}", icons.write, uri);
            }
        }

        if !result.skipped.is_empty() {
            let _ = writeln!(out, "  {} modules already up-to-date", result.skipped.len());
            if self.verbose > 0 {
                for path in &result.skipped {
                    let _ = writeln!(
                        out,
                        "    {} {}",
                        icons.skip,
                        display_relative(path, project_root)
                    );
                }
            }
        }

        let unrouted: Vec<_> = result
            .rest_directories
            .iter()
            .filter(|(_, role)| *role == DirectoryRole::UnroutedRest)
            .collect();
        if !unrouted.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  Skipped REST directories (no input/harmonize segment):");
            for (path, _) in unrouted {
                let _ = writeln!(out, "    [!] {}", display_relative(path, project_root));
            }
        }

        if result.walk == WalkOutcome::EntitiesRootMissing {
            let _ = writeln!(out);
            let _ = writeln!(out, "  No entities directory; walk and cache invalidation skipped");
        }

        if let Some(error) = &result.invalidation_error {
            let _ = writeln!(out);
            let _ = writeln!(out, "  {} Staging cache invalidation failed: {}", icons.cross, error);
        } else if result.cache_invalidated {
            let _ = writeln!(out, "  Staging cache invalidated");
        }

        out
    }

    pub fn render_reset(&self, result: &ResetResult) -> String {
        let icons = self.icons();
        let mut out = String::new();
        for cleared in &result.cleared {
            match cleared.entries {
                Some(n) => {
                    let _ = writeln!(
                        out,
                        "{} Cleared {} record ({} entries)",
                        icons.check, cleared.channel, n
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "{} Cleared {} record (unreadable)",
                        icons.check, cleared.channel
                    );
                }
            }
        }
        out
    }

    pub fn render_classification(&self, directory: &Path, role: DirectoryRole) -> String {
        let destination = match role.target() {
            Some(target) => format!(" -> {}", target),
            None if role == DirectoryRole::UnroutedRest => " -> skipped".to_string(),
            None => String::new(),
        };
        format!("{}: {}{}\n", directory.display(), role, destination)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ClearedChannel, UploadedModule};
    use crate::domain::value_objects::DeployChannel;
    use std::path::PathBuf;

    fn ascii() -> TextRenderer {
        TextRenderer {
            unicode: false,
            verbose: 0,
        }
    }

    #[test]
    fn up_to_date_run() {
        let result = DeployResult {
            skipped: vec![PathBuf::from("/p/plugins/a.sjs")],
            ..DeployResult::new()
        };
        let text = ascii().render_deploy(&result, Path::new("/p"));
        assert!(text.starts_with("[OK] Already Up-to-date"));
        assert!(text.contains("1 modules already up-to-date"));
        assert!(!text.contains("a.sjs"));
    }

    #[test]
    fn uploads_grouped_by_target() {
        let result = DeployResult {
            uploaded: vec![
                UploadedModule {
                    target: Target::Final,
                    channel: DeployChannel::Content,
                    uri: "/entities/Order/harmonize/M/REST/x.xml".to_string(),
                    path: PathBuf::from("/p/plugins/entities/Order/harmonize/M/REST/x.xml"),
                },
                UploadedModule {
                    target: Target::Staging,
                    channel: DeployChannel::Modules,
                    uri: "/lib.sjs".to_string(),
                    path: PathBuf::from("/p/plugins/lib.sjs"),
                },
            ],
            entity_documents: vec!["/entities/Order.entity.json".to_string()],
            cache_invalidated: true,
            ..DeployResult::new()
        };
        let text = ascii().render_deploy(&result, Path::new("/p"));

        let staging = text.find("Staging (1 modules)").unwrap();
        let final_tier = text.find("Final (1 modules)").unwrap();
        assert!(staging < final_tier);
        assert!(text.contains("-> /entities/Order.entity.json"));
        assert!(text.contains("Staging cache invalidated"));
    }

    #[test]
    fn unrouted_rest_and_invalidation_failure_are_reported() {
        let result = DeployResult {
            rest_directories: vec![(
                PathBuf::from("/p/plugins/entities/Customer/REST"),
                DirectoryRole::UnroutedRest,
            )],
            invalidation_error: Some("unavailable".to_string()),
            ..DeployResult::new()
        };
        let text = ascii().render_deploy(&result, Path::new("/p"));
        assert!(text.contains("[!] plugins/entities/Customer/REST"));
        assert!(text.contains("[FAIL] Staging cache invalidation failed: unavailable"));
    }

    #[test]
    fn reset_lists_each_channel() {
        let result = ResetResult {
            cleared: vec![
                ClearedChannel {
                    channel: DeployChannel::Modules,
                    entries: Some(3),
                },
                ClearedChannel {
                    channel: DeployChannel::Content,
                    entries: None,
                },
            ],
        };
        let text = ascii().render_reset(&result);
        assert!(text.contains("Cleared modules record (3 entries)"));
        assert!(text.contains("Cleared content record (unreadable)"));
    }

    #[test]
    fn classification_shows_destination() {
        let renderer = ascii();
        assert_eq!(
            renderer.render_classification(
                Path::new("a/harmonize/M/REST"),
                DirectoryRole::RestHarmonize
            ),
            "a/harmonize/M/REST: rest-harmonize -> final\n"
        );
        assert_eq!(
            renderer.render_classification(Path::new("a/REST"), DirectoryRole::UnroutedRest),
            "a/REST: unrouted-rest -> skipped\n"
        );
    }
}
