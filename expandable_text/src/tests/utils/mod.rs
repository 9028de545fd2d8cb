// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod mono;
pub(crate) mod samples;

pub(crate) use mono::{LINE_HEIGHT, MonoElement, MonoHost, MonoLayout};
