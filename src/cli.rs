use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "doc2txt",
    version,
    about = "Run LibreOffice to convert .odt, .doc, and .docx documents to plain text"
)]
pub struct Cli {
    #[arg(
        help = "Files and/or directories to process. Files must have extension \
                .odt, .doc, or .docx; directories are scanned for those extensions"
    )]
    pub paths: Vec<PathBuf>,

    #[arg(
        short = 'r',
        long,
        help = "Recursively search sub-directories for document files"
    )]
    pub recurse: bool,

    #[arg(
        short = 'o',
        long,
        help = "Overwrite existing output files. By default, existing files are not replaced"
    )]
    pub overwrite: bool,

    #[arg(
        short = 'd',
        long = "datetime-tag",
        help = "Add a [date_time] tag, based on the source document last modified \
                timestamp, to the output file names"
    )]
    pub datetime_tag: bool,

    #[arg(
        short = 'w',
        long,
        help = "Also write a line-wrapped copy of each converted file"
    )]
    pub wrap: bool,

    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "LibreOffice executable to invoke (default: soffice or libreoffice on PATH)"
    )]
    pub converter: Option<PathBuf>,
}
