//! Study programs and the course subjects each one offers.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A study program a student can enroll in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Program {
    Informatics,
    InformationSystems,
    ElectricalEngineering,
    Management,
    Accounting,
}

impl Program {
    /// Human-readable program name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Informatics => "Teknik Informatika",
            Self::InformationSystems => "Sistem Informasi",
            Self::ElectricalEngineering => "Teknik Elektro",
            Self::Management => "Manajemen",
            Self::Accounting => "Akuntansi",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The course subjects offered by a program.
pub const fn subjects_for(program: Program) -> &'static [&'static str] {
    match program {
        Program::Informatics => &[
            "Algoritma dan Pemrograman",
            "Struktur Data",
            "Basis Data",
            "Jaringan Komputer",
            "Sistem Operasi",
            "Rekayasa Perangkat Lunak",
            "Kecerdasan Buatan",
            "Matematika Diskrit",
        ],
        Program::InformationSystems => &[
            "Pengantar Sistem Informasi",
            "Analisis dan Perancangan Sistem",
            "Basis Data",
            "Manajemen Proyek TI",
            "E-Business",
            "Audit Sistem Informasi",
        ],
        Program::ElectricalEngineering => &[
            "Rangkaian Listrik",
            "Elektronika Dasar",
            "Sistem Digital",
            "Sinyal dan Sistem",
            "Medan Elektromagnetik",
            "Sistem Kendali",
        ],
        Program::Management => &[
            "Pengantar Manajemen",
            "Manajemen Pemasaran",
            "Manajemen Keuangan",
            "Manajemen Sumber Daya Manusia",
            "Perilaku Organisasi",
            "Kewirausahaan",
        ],
        Program::Accounting => &[
            "Pengantar Akuntansi",
            "Akuntansi Keuangan",
            "Akuntansi Biaya",
            "Perpajakan",
            "Auditing",
            "Sistem Informasi Akuntansi",
        ],
    }
}

/// Whether `subject` is one the program offers, ignoring case.
pub fn offers(program: Program, subject: &str) -> bool {
    subjects_for(program)
        .iter()
        .any(|s| s.eq_ignore_ascii_case(subject.trim()))
}
