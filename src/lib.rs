/*!
sat2d
========

**sat2d** is a 2-dimensional narrow-phase collision detection library written
with the rust programming language. It implements the Separating Axis Theorem
for convex polygons and circles: given two shapes, each possibly rotated and
scaled, it reports whether they overlap and, if so, the minimum translation
needed to separate them, along with per-shape containment flags.

The library is purely computational: it never mutates the shapes it is given,
performs no I/O, and assumes a broad phase has already narrowed the set of
candidate pairs.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
