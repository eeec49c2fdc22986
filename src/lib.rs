//! Mastermind
//!
//! A code-breaking game: guess the hidden sequence of colors, guided by red
//! pegs (right color, right place) and white pegs (right color, wrong place).
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Color, Difficulty, Feedback, Palette, Settings};
//! use mastermind::game::CodeGenerator;
//!
//! let settings = Settings::new(Difficulty::Easy, false);
//! let mut generator = CodeGenerator::seeded(Palette::standard(), 42);
//! let code = generator.generate_code(&settings).unwrap();
//!
//! let guess = Code::new(vec![Color::Pink, Color::Orange, Color::Yellow, Color::Green]);
//! let feedback = Feedback::calculate(&code, &guess).unwrap();
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Code generation, sessions and input decoding
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
