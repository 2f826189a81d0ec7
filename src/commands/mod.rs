// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod simulate;
pub mod matching;
pub mod packages;
pub mod contact;
pub mod config;
pub mod doctor;
