// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

#![warn(missing_docs, clippy::needless_borrow)]
// Clippy lints, some should be disabled incrementally
#![allow(
    clippy::float_cmp,
    clippy::module_inception,
    clippy::new_without_default
)]

//! Vaxcast fetches Mongolia's COVID-19 vaccination statistics from two public
//! APIs, composes a status update with textual progress bars, and posts it to
//! the [@mnvaccinecount](https://twitter.com/mnvaccinecount) Twitter account.

pub mod bar;
pub mod configs;
pub mod datasource;
pub mod error;
pub mod prelude;
pub mod publisher;
pub mod status;
pub mod test_util;
