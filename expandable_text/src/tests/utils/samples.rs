// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text samples shared by the controller tests.

/// Six four letter words. At a width of 100 the monospace host fits two words per line.
pub(crate) const WORDS: &str = "aaaa bbbb cccc dddd eeee ffff";

/// Three short lines separated by hard breaks.
pub(crate) const HARD_BREAKS: &str = "aaaa\nbbbb\ncccc";

/// Fits on one line at any width used by the tests.
pub(crate) const VERY_SHORT: &str = "Very short text";

/// Right-to-left text.
pub(crate) const ARABIC: &str = "هذا نص عربي طويل يستخدم لاختبار الاقتطاع من اليمين إلى اليسار في فقرة واحدة";

/// One hundred words of lorem ipsum.
pub(crate) const LOREM: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua Ut enim ad minim veniam quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur Excepteur sint \
occaecat cupidatat non proident sunt in culpa qui officia deserunt mollit anim id est laborum \
Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque \
laudantium totam rem aperiam eaque ipsa quae ab illo inventore veritatis et quasi architecto \
beatae vitae dicta sunt explicabo";
