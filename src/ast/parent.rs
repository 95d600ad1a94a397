//! Weak parent back-pointers for AST nodes.
//!
//! The AST is arena-owned: a node never owns its parent, so a real pointer
//! field would create a cycle the arena can't express. Instead this builds a
//! side table, keyed by node address, mapping each node to its immediate
//! parent's address -- the same "walk once, index by identity" shape
//! `Locator` uses for ancestor paths, just recorded for every node instead of
//! only the ones containing a target offset.

use super::visitor::{Visitor, walk_class_member, walk_expr, walk_stmt};
use super::*;
use std::collections::HashMap;

/// A node's parent, if it has one. The root statements of a `Program` have
/// no parent.
#[derive(Clone, Copy)]
pub enum ParentRef<'ast> {
    Stmt(StmtId<'ast>),
    Expr(ExprId<'ast>),
    ClassMember(&'ast ClassMember<'ast>),
}

/// Address-keyed table of parent pointers, built once after parsing.
pub struct ParentTable<'ast> {
    parents: HashMap<usize, ParentRef<'ast>>,
}

fn addr_stmt(stmt: StmtId<'_>) -> usize {
    stmt as *const Stmt as usize
}

fn addr_expr(expr: ExprId<'_>) -> usize {
    expr as *const Expr as usize
}

fn addr_member(member: &ClassMember<'_>) -> usize {
    member as *const ClassMember as usize
}

impl<'ast> ParentTable<'ast> {
    pub fn build(program: &'ast Program<'ast>) -> Self {
        let mut builder = Builder {
            parents: HashMap::new(),
            stack: std::vec::Vec::new(),
        };
        for stmt in program.statements {
            builder.visit_stmt(stmt);
        }
        ParentTable { parents: builder.parents }
    }

    pub fn parent_of_stmt(&self, stmt: StmtId<'ast>) -> Option<ParentRef<'ast>> {
        self.parents.get(&addr_stmt(stmt)).copied()
    }

    pub fn parent_of_expr(&self, expr: ExprId<'ast>) -> Option<ParentRef<'ast>> {
        self.parents.get(&addr_expr(expr)).copied()
    }

    pub fn parent_of_member(&self, member: &'ast ClassMember<'ast>) -> Option<ParentRef<'ast>> {
        self.parents.get(&addr_member(member)).copied()
    }
}

struct Builder<'ast> {
    parents: HashMap<usize, ParentRef<'ast>>,
    stack: std::vec::Vec<ParentRef<'ast>>,
}

impl<'ast> Visitor<'ast> for Builder<'ast> {
    fn visit_stmt(&mut self, stmt: StmtId<'ast>) {
        if let Some(&top) = self.stack.last() {
            self.parents.insert(addr_stmt(stmt), top);
        }
        self.stack.push(ParentRef::Stmt(stmt));
        walk_stmt(self, stmt);
        self.stack.pop();
    }

    fn visit_expr(&mut self, expr: ExprId<'ast>) {
        if let Some(&top) = self.stack.last() {
            self.parents.insert(addr_expr(expr), top);
        }
        self.stack.push(ParentRef::Expr(expr));
        walk_expr(self, expr);
        self.stack.pop();
    }

    fn visit_class_member(&mut self, member: &'ast ClassMember<'ast>) {
        if let Some(&top) = self.stack.last() {
            self.parents.insert(addr_member(member), top);
        }
        self.stack.push(ParentRef::ClassMember(member));
        walk_class_member(self, member);
        self.stack.pop();
    }
}


impl<'ast> std::fmt::Debug for ParentRef<'ast> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParentRef::Stmt(_) => write!(f, "ParentRef::Stmt"),
            ParentRef::Expr(_) => write!(f, "ParentRef::Expr"),
            ParentRef::ClassMember(_) => write!(f, "ParentRef::ClassMember"),
        }
    }
}
