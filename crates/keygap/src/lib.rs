//! keygap: find the job-description keywords a resume is missing.
//!
//! keygap ranks the terms of a job description by frequency, phrase structure and a
//! domain lexicon, then reports the ones that do not yet appear in a resume. It can also
//! guess the role title a posting is hiring for. Everything runs locally and
//! deterministically; the same inputs always produce the same ranked list.
//!
//! The extraction engine lives in `keygap-engine` and configuration discovery in
//! `keygap-config`; this crate is the command-line front end.

#![warn(missing_docs)]
