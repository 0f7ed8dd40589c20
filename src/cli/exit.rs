use std::io;

use crate::translation::TranslateError;

/// Maps a command error to a sysexits-style exit code.
///
/// Context added with `anyhow` is looked through, so a language error
/// raised while resolving the config still maps to `USAGE`.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if let Some(err) = err.downcast_ref::<TranslateError>() {
        return match err {
            TranslateError::UnrecognizedLanguage(_)
            | TranslateError::UnknownLanguageCode(_)
            | TranslateError::InvalidLanguageInput(_)
            | TranslateError::SourceLanguageNotSet
            | TranslateError::TargetLanguageNotSet
            | TranslateError::InvalidEndpoint(_) => exitcode::USAGE,
            TranslateError::EmptyInput => exitcode::NOINPUT,
            TranslateError::Transport(_) => exitcode::UNAVAILABLE,
            TranslateError::MalformedResponse(_) => exitcode::PROTOCOL,
            TranslateError::UnknownField(_) => exitcode::SOFTWARE,
        };
    }

    if err.downcast_ref::<io::Error>().is_some() {
        return exitcode::IOERR;
    }

    exitcode::SOFTWARE
}
