use crate::core::config::Config;

/// Builds the full yt-dlp command line for one URL.
///
/// Flag order is fixed: format, sponsorblock, move, playlist,
/// naming/metadata. The URL and format selector are interpolated verbatim;
/// the line is meant for the local user's own shell.
pub fn build_download_command(url: &str, config: &Config) -> String {
    let mut parts = vec![
        "yt-dlp".to_string(),
        url.to_string(),
        format!("-f {}", config.format),
    ];

    if config.sponsorblock_enabled {
        parts.push("--sponsorblock-remove all".to_string());
    }

    if config.move_files {
        parts.push(format!("--exec 'mv {{}} {}'", config.output_folder.path()));
    }

    if config.enable_playlists {
        parts.push("--yes-playlist".to_string());
    }

    parts.push("--output %(title)s.%(ext)s --add-metadata".to_string());

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::OutputFolder;
    use pretty_assertions::assert_eq;

    fn config(
        format: &str,
        output_folder: OutputFolder,
        sponsorblock_enabled: bool,
        move_files: bool,
        enable_playlists: bool,
    ) -> Config {
        Config {
            format: format.to_string(),
            output_folder,
            sponsorblock_enabled,
            move_files,
            enable_playlists,
        }
    }

    #[test]
    fn test_minimal_command_has_no_optional_flags() {
        let line = build_download_command(
            "https://example.com/watch?v=1",
            &config("bestaudio", OutputFolder::CurrentDir, false, false, false),
        );

        assert_eq!(
            line,
            "yt-dlp https://example.com/watch?v=1 -f bestaudio \
             --output %(title)s.%(ext)s --add-metadata"
        );
        assert!(!line.contains("--sponsorblock-remove"));
        assert!(!line.contains("--exec"));
        assert!(!line.contains("--yes-playlist"));
    }

    #[test]
    fn test_all_flags_appear_in_fixed_order() {
        let line = build_download_command(
            "https://example.com/watch?v=1",
            &config(
                "bestvideo+bestaudio",
                OutputFolder::Videos,
                true,
                true,
                true,
            ),
        );

        assert_eq!(
            line,
            "yt-dlp https://example.com/watch?v=1 -f bestvideo+bestaudio \
             --sponsorblock-remove all \
             --exec 'mv {} ~/storage/shared/Videos' \
             --yes-playlist \
             --output %(title)s.%(ext)s --add-metadata"
        );
    }

    #[test]
    fn test_move_destination_is_the_literal_folder_path() {
        let line = build_download_command(
            "https://example.com/watch?v=1",
            &config("bestaudio", OutputFolder::Music, false, true, false),
        );

        assert!(line.contains("--exec 'mv {} ~/storage/shared/Music'"));
        // The alias name alone must never leak into the command
        assert!(!line.contains("mv {} Music"));
    }

    #[test]
    fn test_no_double_spaces_when_flags_are_disabled() {
        let line = build_download_command(
            "https://example.com/watch?v=1",
            &config("bestaudio", OutputFolder::CurrentDir, false, true, false),
        );

        assert!(!line.contains("  "));
    }
}
