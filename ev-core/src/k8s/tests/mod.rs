
use ev_testutils::*;
use rstest::*;

use super::*;
