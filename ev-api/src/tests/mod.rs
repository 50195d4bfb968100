mod conditions_test;
mod provisioner_test;

use rstest::*;

use crate::conditions::*;
use crate::v1alpha1::*;
