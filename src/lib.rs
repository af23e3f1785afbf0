//! # zdd-forest: sets of labeled trees as Zero-Suppressed Decision Diagrams
//!
//! **`zdd-forest`** represents and manipulates *sets of rooted, edge-labeled
//! trees* through **Zero-suppressed Decision Diagrams (ZDDs)**. A set of
//! trees — a forest — is described symbolically by a [`TreeExpr`] and
//! materialized as a compact shared DAG by a [`ZddManager`].
//!
//! ## How it works
//!
//! Every edge position in a tree is named by a rolling hash of the symbol
//! path leading to it. A tree then becomes the set of its edge names, and
//! a set of trees a family of sets — the native territory of ZDDs.
//! Identical subtrees under identical prefixes collapse into shared
//! diagram nodes automatically.
//!
//! ## Key Features
//!
//! - **Manager-Centric**: all operations go through the [`ZddManager`],
//!   which hash-conses nodes and memoizes `union` / `cross_union`
//! - **Two lowerings**: `trees` (the forest itself) and `subtrees`
//!   (every prefix-closed edge selection of every tree)
//! - **Binary wire format**: expressions serialize to a compact
//!   big-endian, tag-dispatched stream
//!
//! ## Quick Start
//!
//! ```
//! use zdd_forest::expr::TreeExpr;
//! use zdd_forest::zdd::ZddManager;
//!
//! let mgr = ZddManager::new();
//!
//! // The forest { a(b), c }: one two-edge tree, one one-edge tree.
//! let t = TreeExpr::sum([TreeExpr::branch(["a", "b"]), TreeExpr::branch(["c"])]);
//!
//! let z = mgr.trees(&t);
//! assert_eq!(mgr.count(z), 2);
//!
//! // Subtrees: the empty tree, a, a(b), and c.
//! let sub = mgr.subtrees(&t);
//! assert_eq!(mgr.count(sub), 4);
//! ```
//!
//! ## Modules
//!
//! - [`mod@expr`] — the symbolic tree-set expressions
//! - [`mod@lower`] — lowering expressions to diagrams
//! - [`mod@zdd`] — the ZDD manager and core set algebra
//! - [`mod@io`] — the binary wire format
//! - [`mod@hash`] — the path hash that names diagram variables
//! - [`mod@iter`] — enumeration of the member sets
//! - [`mod@dot`] — Graphviz visualization
//!
//! [`TreeExpr`]: crate::expr::TreeExpr
//! [`ZddManager`]: crate::zdd::ZddManager

pub mod cache;
pub mod dot;
pub mod expr;
pub mod hash;
pub mod io;
pub mod iter;
pub mod lower;
pub mod node;
pub mod reference;
pub mod subtable;
pub mod symbol;
pub mod types;
pub mod zdd;
