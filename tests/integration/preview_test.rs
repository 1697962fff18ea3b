//! Terminal preview rendering

use indent_bars::{render_preview, Config, IndentBars, PreviewOptions};

use crate::helpers::SAMPLE;

fn plain() -> PreviewOptions {
    PreviewOptions {
        color: false,
        glyph: '|',
    }
}

#[test]
fn preview_continues_bars_over_blank_lines() {
    let mut bars = IndentBars::from_config(&Config::default()).unwrap();
    let lines: Vec<&str> = SAMPLE.lines().collect();
    insta::assert_snapshot!(render_preview(&mut bars, &lines, &plain()).trim_end(), @r"
    fn main() {
        if ready {
        |   go();
        |
        |   done();
        }
    }
    ");
}

#[test]
fn preview_without_blank_line_expansion() {
    let mut config = Config::default();
    config.display.blank_lines = false;
    let mut bars = IndentBars::from_config(&config).unwrap();
    let lines: Vec<&str> = SAMPLE.lines().collect();
    let out = render_preview(&mut bars, &lines, &plain());
    assert_eq!(out.lines().nth(3), Some(""));
}

#[test]
fn preview_expands_tabs_before_drawing() {
    let mut bars = IndentBars::from_config(&Config::default()).unwrap();
    let out = render_preview(&mut bars, &["\t\tx"], &plain());
    assert_eq!(out, "    |   |   |   x\n");
}

#[test]
fn colored_preview_keeps_text() {
    let mut bars = IndentBars::from_config(&Config::starter()).unwrap();
    bars.set_current_depth(1);
    let options = PreviewOptions {
        color: true,
        glyph: '|',
    };
    let out = render_preview(&mut bars, &["        x", "", "        y"], &options);
    assert_eq!(out.lines().count(), 3);
    assert!(out.contains("x\n"));
    assert!(out.ends_with("y\n"));
    if std::env::var_os("NO_COLOR").is_none() {
        assert!(out.contains("\u{1b}[38;2;"));
    }
}
