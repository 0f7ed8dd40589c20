//! Language listing command handler.

use crate::translation::catalog;
use crate::ui::Style;

/// Prints the language catalog to stdout, marking right-to-left languages.
pub fn print_languages(rtl_only: bool) {
    println!("{}", Style::header("Supported languages"));
    for (code, name) in catalog::languages() {
        let rtl = catalog::is_rtl(code);
        if rtl_only && !rtl {
            continue;
        }

        let marker = if rtl {
            format!(" {}", Style::hint("(right-to-left)"))
        } else {
            String::new()
        };
        println!(
            "  {} {}{}",
            Style::code(format!("{code:<6}")),
            Style::secondary(name),
            marker
        );
    }
}
