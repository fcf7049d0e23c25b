//! crates/logging/src/translate.rs
//! Status-code translation into a human-readable message suffix.

use super::message::CodeSuffix;
use super::platform_io::PlatformIo;

/// Resolves the code suffix for a status code; zero means no code.
///
/// The platform's text arrives with whatever trailing punctuation the
/// system facility produces (`FormatMessageW` ends messages with `". "`);
/// it is stripped here so the rendered suffix never doubles up with the
/// line terminator. Lookup failure degrades to the raw numeric fallback
/// rather than dropping the diagnostic.
pub(crate) fn code_suffix(platform: &dyn PlatformIo, code: i32) -> Option<CodeSuffix> {
    if code == 0 {
        return None;
    }

    match platform.error_text(code) {
        Some(text) => {
            let trimmed = text.trim_end_matches([' ', '\t', '\r', '\n', '.']);
            if trimmed.is_empty() {
                Some(CodeSuffix::Raw(code))
            } else {
                Some(CodeSuffix::Described {
                    text: trimmed.to_owned(),
                    code,
                })
            }
        }
        None => Some(CodeSuffix::Raw(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    struct FixedText(Option<&'static str>);

    impl PlatformIo for FixedText {
        fn error_text(&self, _code: i32) -> Option<String> {
            self.0.map(str::to_owned)
        }

        fn file_size(&self, _path: &Path) -> io::Result<Option<u64>> {
            Ok(None)
        }

        fn remove_file(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn zero_code_yields_no_suffix() {
        assert_eq!(code_suffix(&FixedText(Some("unused")), 0), None);
    }

    #[test]
    fn trailing_period_and_space_are_stripped() {
        let suffix = code_suffix(&FixedText(Some("The system cannot find the file specified. ")), 2);
        assert_eq!(
            suffix,
            Some(CodeSuffix::Described {
                text: "The system cannot find the file specified".to_owned(),
                code: 2,
            })
        );
    }

    #[test]
    fn clean_posix_text_is_kept_as_is() {
        let suffix = code_suffix(&FixedText(Some("No such file or directory")), 2);
        assert_eq!(
            suffix,
            Some(CodeSuffix::Described {
                text: "No such file or directory".to_owned(),
                code: 2,
            })
        );
    }

    #[test]
    fn failed_lookup_falls_back_to_raw_code() {
        assert_eq!(code_suffix(&FixedText(None), 9999), Some(CodeSuffix::Raw(9999)));
    }

    #[test]
    fn punctuation_only_text_falls_back_to_raw_code() {
        assert_eq!(code_suffix(&FixedText(Some(". ")), 7), Some(CodeSuffix::Raw(7)));
    }
}
