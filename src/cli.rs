// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env::current_dir;
use std::path::PathBuf;

use clap::Parser;

use crate::cmd::check::check_documents;
use crate::cmd::export::export_document;
use crate::cmd::schema::print_schema;
use crate::document::Format;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Validate props documents.
    Check {
        /// Path to a document, or to a directory of documents. Defaults to
        /// the current directory.
        path: Option<String>,
    },
    /// Print the registered shapes and position labels.
    Schema {
        #[arg(long, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print a normalized copy of a props document.
    Export {
        /// Path to the document.
        path: String,
        #[arg(long, default_value_t = Format::Json)]
        format: Format,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Check { path } => {
            let path: PathBuf = match path {
                Some(path) => PathBuf::from(path),
                None => current_dir()?,
            };
            check_documents(&path)
        }
        Command::Schema { format } => print_schema(format),
        Command::Export { path, format } => export_document(&PathBuf::from(path), format),
    }
}
