//! mkvmerge command options builder.
//!
//! Builds command-line token lists for the remux and strip invocations.
//! Token order for a remux is fixed: output, input group, then subtitle,
//! font and chapter options. Existing tag tracks are deliberately never
//! re-attached.

use std::path::Path;

use crate::attachments::AttachmentSet;

/// Builder for the mkvmerge remux command.
///
/// Generates a list of string tokens ready to pass to mkvmerge (the tool
/// name itself is not included).
pub struct RemuxOptionsBuilder<'a> {
    attachments: &'a AttachmentSet,
    input_path: &'a Path,
    output_path: &'a Path,
}

impl<'a> RemuxOptionsBuilder<'a> {
    pub fn new(attachments: &'a AttachmentSet, input_path: &'a Path, output_path: &'a Path) -> Self {
        Self {
            attachments,
            input_path,
            output_path,
        }
    }

    /// Build the complete remux token list.
    pub fn build(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        tokens.push("--output".to_string());
        tokens.push(self.output_path.to_string_lossy().to_string());

        // Wrap the base file in parentheses for mkvmerge file grouping
        tokens.push("(".to_string());
        tokens.push(self.input_path.to_string_lossy().to_string());
        tokens.push(")".to_string());

        self.add_subtitle_options(&mut tokens);
        self.add_font_options(&mut tokens);
        self.add_chapter_options(&mut tokens);

        tokens
    }

    /// Per subtitle: a language option followed by the grouped file.
    fn add_subtitle_options(&self, tokens: &mut Vec<String>) {
        for subtitle in &self.attachments.subtitles {
            tokens.push("--language".to_string());
            tokens.push(format!("0:{}", subtitle.language));
            tokens.push("(".to_string());
            tokens.push(subtitle.path.to_string_lossy().to_string());
            tokens.push(")".to_string());
        }
    }

    /// Per font: name, MIME type and the file to attach.
    fn add_font_options(&self, tokens: &mut Vec<String>) {
        for font in &self.attachments.fonts {
            tokens.push("--attachment-name".to_string());
            tokens.push(font.name.clone());
            tokens.push("--attachment-mime-type".to_string());
            tokens.push(font.mime.to_string());
            tokens.push("--attach-file".to_string());
            tokens.push(font.path.to_string_lossy().to_string());
        }
    }

    fn add_chapter_options(&self, tokens: &mut Vec<String>) {
        for chapter in &self.attachments.chapters {
            tokens.push("--chapters".to_string());
            tokens.push(chapter.to_string_lossy().to_string());
        }
    }
}

/// Build the strip command token list.
///
/// Produces a copy of `input` at `temp` with attachments, subtitles,
/// chapters and all tags removed.
pub fn strip_options(input: &Path, temp: &Path) -> Vec<String> {
    vec![
        "--output".to_string(),
        temp.to_string_lossy().to_string(),
        "--no-subtitles".to_string(),
        "--no-attachments".to_string(),
        "--no-chapters".to_string(),
        "--no-track-tags".to_string(),
        "--no-global-tags".to_string(),
        "(".to_string(),
        input.to_string_lossy().to_string(),
        ")".to_string(),
    ]
}

/// Format tokens for display (one option per line).
pub fn format_tokens_pretty(tokens: &[String]) -> String {
    let mut result = String::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if token.starts_with('-') && i + 1 < tokens.len() && !tokens[i + 1].starts_with('-') {
            // Option with value
            result.push_str(&format!("{} {} \\\n", token, tokens[i + 1]));
            i += 2;
        } else if token == "(" || token == ")" {
            // File grouping
            result.push_str(&format!("{}\n", token));
            i += 1;
        } else {
            result.push_str(&format!("{} \\\n", token));
            i += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachments::{Font, Subtitle};
    use std::path::PathBuf;

    fn full_set() -> AttachmentSet {
        AttachmentSet {
            fonts: vec![Font {
                path: PathBuf::from("/videos/movie/attachments/font.ttf"),
                name: "font.ttf".to_string(),
                mime: "application/x-truetype-font",
            }],
            subtitles: vec![Subtitle {
                path: PathBuf::from("/videos/movie/sub.eng.srt"),
                language: "eng".to_string(),
            }],
            chapters: vec![PathBuf::from("/videos/movie/chapters.xml")],
        }
    }

    #[test]
    fn builds_tokens_in_fixed_order() {
        let set = full_set();
        let input = PathBuf::from("/videos/movie.mkv");
        let output = PathBuf::from("/out/movie (1).mkv");

        let tokens = RemuxOptionsBuilder::new(&set, &input, &output).build();

        let expected: Vec<String> = [
            "--output",
            "/out/movie (1).mkv",
            "(",
            "/videos/movie.mkv",
            ")",
            "--language",
            "0:eng",
            "(",
            "/videos/movie/sub.eng.srt",
            ")",
            "--attachment-name",
            "font.ttf",
            "--attachment-mime-type",
            "application/x-truetype-font",
            "--attach-file",
            "/videos/movie/attachments/font.ttf",
            "--chapters",
            "/videos/movie/chapters.xml",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(tokens, expected);
    }

    #[test]
    fn empty_set_yields_base_tokens_only() {
        let set = AttachmentSet::default();
        let input = PathBuf::from("/videos/movie.mkv");
        let output = PathBuf::from("/out/movie (1).mkv");

        let tokens = RemuxOptionsBuilder::new(&set, &input, &output).build();
        assert_eq!(
            tokens,
            vec!["--output", "/out/movie (1).mkv", "(", "/videos/movie.mkv", ")"]
        );
    }

    #[test]
    fn strip_drops_everything_reattachable() {
        let tokens = strip_options(
            Path::new("/videos/movie.mkv"),
            Path::new("/videos/movie_stripped.mkv"),
        );

        assert_eq!(tokens[0], "--output");
        assert_eq!(tokens[1], "/videos/movie_stripped.mkv");
        assert!(tokens.contains(&"--no-subtitles".to_string()));
        assert!(tokens.contains(&"--no-attachments".to_string()));
        assert!(tokens.contains(&"--no-chapters".to_string()));
        assert!(tokens.contains(&"--no-track-tags".to_string()));
        assert!(tokens.contains(&"--no-global-tags".to_string()));
        assert_eq!(tokens[tokens.len() - 3..], ["(", "/videos/movie.mkv", ")"]);
    }

    #[test]
    fn pretty_format_groups_options() {
        let tokens: Vec<String> = ["--output", "/out/movie.mkv", "(", "/in/movie.mkv", ")"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let pretty = format_tokens_pretty(&tokens);
        assert!(pretty.contains("--output /out/movie.mkv"));
        assert!(pretty.contains("(\n"));
    }
}
