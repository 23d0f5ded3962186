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

use std::path::Path;

use crate::document::Document;
use crate::document::Format;
use crate::error::Fallible;

pub fn export_document(path: &Path, format: Format) -> Fallible<()> {
    println!("{}", render_document(path, format)?);
    Ok(())
}

pub fn render_document(path: &Path, format: Format) -> Fallible<String> {
    let doc = Document::load(path)?;
    log::debug!("Exporting {} entries as {format}", doc.len());
    format.render(&doc.to_value())
}
