//! Markdown terminal formatting using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        print_rich(markdown);
    } else {
        print_plain(markdown);
    }
}

/// Print with termimad styling
fn print_rich(markdown: &str) {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.print_text(markdown);
}

/// Customize termimad skin for changelog output
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Title and date headings stand out, entry headings stay subtle
    skin.headers[0].set_fg(Magenta);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Cyan);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.headers[2].set_fg(White);

    skin.inline_code.set_fg(Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);
}

/// Print plain markdown without formatting
fn print_plain(markdown: &str) {
    println!("{}", markdown);
}
