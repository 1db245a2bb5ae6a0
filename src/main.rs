//! Translates between Genesis Game Genie codes and 24-bit address / 16-bit value pairs.
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use fltk::{prelude::*, *};
use fltk::button::{Button, CheckButton};
use fltk::enums::{Align, Color, Font, FrameType};
use fltk::frame::Frame;
use fltk::text::{TextBuffer, TextDisplay, TextEditor};
use fltk::window::Window;
use std::cell::RefCell;
use std::rc::Rc;

use genesis_genie_converter::config::{Config, VERSION};
use genesis_genie_converter::convert_line::{Entry, LineConverter};

const WINDOW_WIDTH: i32 = 640;
const WINDOW_HEIGHT: i32 = 600;
const MARGIN: i32 = 25;
const BUTTON_HEIGHT: i32 = 40;
const BUTTON_WIDTH: i32 = 120;
const INPUT_HEIGHT: i32 = 170;

fn main() {
    let app = app::App::default().with_scheme(app::Scheme::Gtk);

    let mut window = Window::default()
        .with_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .with_label(&format!("Genesis Game Genie Converter v{}", VERSION));
    window.make_resizable(false);

    let mut y_pos = MARGIN;

    let mut input_label = Frame::default()
        .with_pos(MARGIN, y_pos)
        .with_size(WINDOW_WIDTH - 2 * MARGIN, 25)
        .with_label("Codes or address: value lines (e.g. SCRA-BJX0 [5] or 009c76: 5478):");
    input_label.set_label_size(13);
    input_label.set_align(Align::Left | Align::Inside);

    y_pos += 30;

    let input_buffer = TextBuffer::default();
    let mut input_editor = TextEditor::default()
        .with_pos(MARGIN, y_pos)
        .with_size(WINDOW_WIDTH - 2 * MARGIN, INPUT_HEIGHT);
    input_editor.set_buffer(input_buffer.clone());
    input_editor.set_text_font(Font::Courier);
    input_editor.set_frame(FrameType::DownBox);

    y_pos += INPUT_HEIGHT + 10;

    let mut annotate_check = CheckButton::default()
        .with_pos(MARGIN, y_pos)
        .with_size(300, 25)
        .with_label("Show [N] / +N annotations");
    annotate_check.set_checked(true);

    y_pos += 35;

    let mut output_label = Frame::default()
        .with_pos(MARGIN, y_pos)
        .with_size(WINDOW_WIDTH - 2 * MARGIN, 25)
        .with_label("Result:");
    output_label.set_label_size(13);
    output_label.set_align(Align::Left | Align::Inside);

    y_pos += 30;

    let output_height = WINDOW_HEIGHT - y_pos - BUTTON_HEIGHT - 30;

    let output_buffer = TextBuffer::default();
    let mut output_display = TextDisplay::default()
        .with_pos(MARGIN, y_pos)
        .with_size(WINDOW_WIDTH - 2 * MARGIN, output_height);
    output_display.set_buffer(output_buffer.clone());
    output_display.set_text_font(Font::Courier);
    output_display.set_frame(FrameType::DownBox);

    let button_y = WINDOW_HEIGHT - BUTTON_HEIGHT - 20;
    let button_spacing = 10;
    let total_button_width = 4 * BUTTON_WIDTH + 3 * button_spacing;
    let start_x = (WINDOW_WIDTH - total_button_width) / 2;

    let mut convert_btn = Button::default()
        .with_pos(start_x, button_y)
        .with_size(BUTTON_WIDTH, BUTTON_HEIGHT)
        .with_label("Convert");
    convert_btn.set_color(Color::from_rgb(70, 130, 180));
    convert_btn.set_label_color(Color::White);

    let mut clear_btn = Button::default()
        .with_pos(start_x + BUTTON_WIDTH + button_spacing, button_y)
        .with_size(BUTTON_WIDTH, BUTTON_HEIGHT)
        .with_label("Clear");

    let mut help_btn = Button::default()
        .with_pos(start_x + 2 * (BUTTON_WIDTH + button_spacing), button_y)
        .with_size(BUTTON_WIDTH, BUTTON_HEIGHT)
        .with_label("Help");

    let mut quit_btn = Button::default()
        .with_pos(start_x + 3 * (BUTTON_WIDTH + button_spacing), button_y)
        .with_size(BUTTON_WIDTH, BUTTON_HEIGHT)
        .with_label("Quit");

    window.end();
    window.show();

    // Shared state
    let input_buffer_rc = Rc::new(RefCell::new(input_buffer));
    let output_buffer_rc = Rc::new(RefCell::new(output_buffer));
    let annotate_check_rc = Rc::new(RefCell::new(annotate_check.clone()));

    // Convert button
    {
        let input = input_buffer_rc.clone();
        let output = output_buffer_rc.clone();
        let annotate = annotate_check_rc.clone();

        convert_btn.set_callback(move |_| {
            let text = input.borrow().text();
            if text.trim().is_empty() {
                output.borrow_mut().set_text("Error: Please enter a code or an address: value line");
                return;
            }

            // Fresh converter: the result depends only on the editor text
            let config = Config::default().with_annotate(annotate.borrow().is_checked());
            let result = convert_text(&text, config);
            output.borrow_mut().set_text(&result);
        });
    }

    // Clear button
    {
        let input = input_buffer_rc.clone();
        let output = output_buffer_rc.clone();

        clear_btn.set_callback(move |_| {
            input.borrow_mut().set_text("");
            output.borrow_mut().set_text("");
        });
    }

    help_btn.set_callback(|_| {
        show_help_window();
    });

    quit_btn.set_callback(|_| {
        app::quit();
    });

    window.set_callback(|_| {
        if app::event() == enums::Event::Close {
            app::quit();
        }
    });

    if let Err(e) = app.run() {
        eprintln!("Error: {}", e);
    }
}

/// Convert all lines and render records and diagnostics in input order
fn convert_text(text: &str, config: Config) -> String {
    let mut converter = LineConverter::new(config);
    let mut out = String::new();

    for report in converter.convert_text(text) {
        for entry in &report.entries {
            match entry {
                Entry::Record(record) => out.push_str(&record.to_string()),
                Entry::Diagnostic(d) => out.push_str(&d.to_string()),
            }
            out.push('\n');
        }
    }

    out
}

/// Show help window with usage instructions
fn show_help_window() {
    let help_width = 560;
    let help_height = 480;

    let mut help_window = Window::default()
        .with_size(help_width, help_height)
        .with_label(&format!("Help - Genesis Game Genie Converter v{}", VERSION));
    help_window.make_resizable(false);
    help_window.set_pos(
        (app::screen_size().0 as i32 - help_width) / 2,
        (app::screen_size().1 as i32 - help_height) / 2,
    );

    let help_text = format!(
        r#"Genesis Game Genie Converter v{}

Copyright (c) 2025 Tommy Olsen
Licensed under the MIT License.

===============================================================

CODE TO ADDRESS

Enter a Game Genie code, e.g.
  SCRA-BJX0
and you get the address and 16-bit data:
  SCRA-BJX0 +2    = 009c76: 5478

Lowercase letters, O for 0 and I for 1 are accepted.

===============================================================

ADDRESS TO CODE

Enter the address and data:
  009c76: 5478
More values after one address go to the following words:
  009c76: 5478 4e71

===============================================================

CHANGING A CODE

A number in square brackets after a code replaces the lower
8 bits of the data (number of lives, for example):
  SCRA-BJX0 [99]

+N or -N (N=1..8) after a code changes an ADDQ/SUBQ
instruction's increment:
  SCRA-BJX0 -1
"#, VERSION);

    let mut text_buffer = TextBuffer::default();
    text_buffer.set_text(&help_text);

    let mut text_display = TextDisplay::default()
        .with_pos(15, 15)
        .with_size(help_width - 30, help_height - 70);
    text_display.set_buffer(text_buffer);
    text_display.wrap_mode(text::WrapMode::AtBounds, 0);
    text_display.set_frame(FrameType::DownBox);

    let mut close_btn = Button::default()
        .with_pos((help_width - 100) / 2, help_height - 45)
        .with_size(100, 35)
        .with_label("Close");

    help_window.end();
    help_window.make_modal(true);
    help_window.show();

    close_btn.set_callback({
        let mut win = help_window.clone();
        move |_| {
            win.hide();
        }
    });

    while help_window.shown() {
        app::wait();
    }
}
