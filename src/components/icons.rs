//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons; change the theme here.

use icondata::Icon;

use crate::models::{Entry, FileKind};

pub const BACK: Icon = icondata::BsChevronLeft;
pub const HOME: Icon = icondata::BsHouseFill;
pub const REFRESH: Icon = icondata::BsArrowClockwise;
pub const SEARCH: Icon = icondata::BsSearch;
pub const CLOSE: Icon = icondata::BsXLg;
pub const CLEAR: Icon = icondata::BsTrash;

pub const STAR: Icon = icondata::BsStar;
pub const STAR_FILLED: Icon = icondata::BsStarFill;

pub const FOLDER: Icon = icondata::BsFolderFill;
pub const PROJECT: Icon = icondata::BsBoxSeam;
pub const SCRIPT: Icon = icondata::BsFileEarmarkCode;
pub const PRESET: Icon = icondata::BsLightningCharge;
pub const IMAGE: Icon = icondata::BsFileEarmarkImage;
pub const VIDEO: Icon = icondata::BsFileEarmarkPlay;
pub const AUDIO: Icon = icondata::BsFileEarmarkMusic;
pub const FILE: Icon = icondata::BsFileEarmark;
pub const COMPOSITION: Icon = icondata::BsFilm;
pub const FOOTAGE: Icon = icondata::BsImage;

/// Icon for an entry, by kind.
pub fn for_entry(entry: &Entry) -> Icon {
    match entry {
        Entry::Folder(_) => FOLDER,
        Entry::Composition(_) => COMPOSITION,
        Entry::Footage(_) => FOOTAGE,
        Entry::File(file) => match file.kind() {
            FileKind::Project => PROJECT,
            FileKind::Script => SCRIPT,
            FileKind::Preset => PRESET,
            FileKind::Image => IMAGE,
            FileKind::Video => VIDEO,
            FileKind::Audio => AUDIO,
            FileKind::Other => FILE,
        },
    }
}
