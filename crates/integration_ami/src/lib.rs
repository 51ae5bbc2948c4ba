//! Asterisk Manager Interface integration
//!
//! Minimal AMI client for one job: log in, originate a playback call
//! on an AllStar node, log off. This is not a general-purpose AMI
//! library; it speaks exactly the three actions wx-announce needs and
//! holds the connection only for the duration of one announcement.

mod action;
pub mod client;

pub use action::{AmiAction, AmiResponse};
pub use client::{AmiClient, AmiConfig, AmiError};
