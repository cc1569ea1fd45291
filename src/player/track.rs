/// HipChat status cannot exceed 50 characters.
pub const MAX_STATUS_CHARS: usize = 50;
/// Characters kept from an overlong status before the ellipsis.
const TRUNCATED_CHARS: usize = 46;
const ELLIPSIS: &str = "...";
const SEPARATOR: &str = " | ";

/// The track a player reports as currently playing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
}

impl Track {
    /// Parse the linefeed separated `title`, `artist`, `album` lines the
    /// player script prints. No output, or an empty title, means nothing is
    /// playing.
    pub fn from_script_output(output: &str) -> Option<Track> {
        let mut lines = output.lines();
        let title = lines.next()?.trim();
        if title.is_empty() {
            return None;
        }
        let mut field = || {
            lines
                .next()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let artist = field();
        let album = field();

        Some(Track {
            title: title.to_string(),
            artist,
            album,
        })
    }

    /// `"<title>"` or `"<title> | <artist>"`.
    pub fn display(&self) -> String {
        match &self.artist {
            Some(artist) if !artist.is_empty() => {
                format!("{}{}{}", self.title, SEPARATOR, artist)
            }
            _ => self.title.clone(),
        }
    }
}

/// Keep a status within HipChat's limit, marking a cut with an ellipsis.
///
/// Counts characters rather than bytes so titles are never split inside a
/// multi-byte character.
pub fn truncate_status(status: &str) -> String {
    if status.chars().count() <= MAX_STATUS_CHARS {
        return status.to_string();
    }
    let mut truncated: String = status.chars().take(TRUNCATED_CHARS).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str, artist: Option<&str>) -> Track {
        Track {
            title: title.to_string(),
            artist: artist.map(str::to_string),
            album: None,
        }
    }

    #[test]
    fn display_without_artist_is_just_the_title() {
        assert_eq!(track("Song", None).display(), "Song");
        assert_eq!(track("Song", Some("")).display(), "Song");
    }

    #[test]
    fn display_with_artist_uses_separator() {
        assert_eq!(track("Song", Some("Band")).display(), "Song | Band");
    }

    #[test]
    fn parses_all_fields() {
        let parsed =
            Track::from_script_output("Song\nBand\nAlbum\n").unwrap();

        assert_eq!(
            parsed,
            Track {
                title: "Song".to_string(),
                artist: Some("Band".to_string()),
                album: Some("Album".to_string()),
            }
        );
    }

    #[test]
    fn empty_artist_line_is_absent() {
        let parsed = Track::from_script_output("Song\n\nAlbum").unwrap();

        assert_eq!(parsed.artist, None);
        assert_eq!(parsed.album, Some("Album".to_string()));
        assert_eq!(parsed.display(), "Song");
    }

    #[test]
    fn no_output_means_nothing_playing() {
        assert_eq!(Track::from_script_output(""), None);
        assert_eq!(Track::from_script_output("\n\n"), None);
    }

    #[test]
    fn short_status_is_unchanged() {
        assert_eq!(truncate_status("Song | Band"), "Song | Band");

        let exactly_fifty = "a".repeat(50);
        assert_eq!(truncate_status(&exactly_fifty), exactly_fifty);
    }

    #[test]
    fn long_status_is_cut_to_forty_nine() {
        let long = "b".repeat(51);

        let truncated = truncate_status(&long);

        assert_eq!(truncated.chars().count(), 49);
        assert_eq!(truncated, format!("{}...", "b".repeat(46)));
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let long = "é".repeat(60);

        let truncated = truncate_status(&long);

        assert_eq!(truncated, format!("{}...", "é".repeat(46)));
    }
}
