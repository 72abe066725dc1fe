//! Singly linked list stored in an arena.
//!
//! Nodes live in a single `Vec` and are linked by index. Removed slots are
//! chained in a free list and reused by later insertions, so a list used as a
//! FIFO queue stops allocating once it reached its peak length.

use crate::error::Result;

#[derive(Debug, Clone)]
struct Node<T> {
    /// `None` iff the slot is in the free list
    value: Option<T>,
    next: Option<usize>,
}

/**
singly linked list with O(1) insertion at both ends, O(1) removal at the head,
and a cursor allowing O(1) insertion/removal at the cursor position.

Insertions report allocation failures instead of aborting.
*/
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    /// first free slot (free slots are chained through `next`)
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    /// maximum number of slots, allocation fails beyond it
    #[cfg(test)]
    node_limit: Option<usize>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> LinkedList<T> {

    /// creates an empty list (does not allocate)
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(), free: None, head: None, tail: None, len: 0,
            #[cfg(test)]
            node_limit: None,
        }
    }

    /// list whose allocations fail once `limit` slots are in use
    #[cfg(test)]
    pub(crate) fn with_node_limit(limit:usize) -> Self {
        Self { node_limit: Some(limit), ..Self::new() }
    }

    /// number of elements
    pub fn len(&self) -> usize { self.len }

    /// true iff the list contains no element
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// makes sure the next `additional` insertions do not allocate
    pub fn try_reserve(&mut self, additional:usize) -> Result<()> {
        let spare = self.nodes.len() - self.len;
        if additional > spare {
            self.nodes.try_reserve(additional - spare)?;
        }
        Ok(())
    }

    /// stores a value in a free slot (or a new one) and returns its index
    fn alloc(&mut self, value:T, next:Option<usize>) -> Result<usize> {
        match self.free {
            Some(i) => {
                self.free = self.nodes[i].next;
                self.nodes[i] = Node { value: Some(value), next };
                Ok(i)
            }
            None => {
                #[cfg(test)]
                {
                    if self.node_limit.map_or(false, |limit| self.nodes.len() >= limit) {
                        // an impossible request, reported like a real allocation failure
                        self.nodes.try_reserve(usize::MAX)?;
                    }
                }
                self.nodes.try_reserve(1)?;
                self.nodes.push(Node { value: Some(value), next });
                Ok(self.nodes.len() - 1)
            }
        }
    }

    /// moves slot i to the free list and returns its value
    fn release(&mut self, i:usize) -> Option<T> {
        let value = self.nodes[i].value.take();
        self.nodes[i].next = self.free;
        self.free = Some(i);
        value
    }

    /// inserts a value before the first element
    pub fn push_front(&mut self, value:T) -> Result<()> {
        let i = self.alloc(value, self.head)?;
        self.head = Some(i);
        if self.tail.is_none() { self.tail = Some(i); }
        self.len += 1;
        Ok(())
    }

    /// inserts a value after the last element
    pub fn push_back(&mut self, value:T) -> Result<()> {
        let i = self.alloc(value, None)?;
        match self.tail {
            Some(t) => self.nodes[t].next = Some(i),
            None => self.head = Some(i),
        }
        self.tail = Some(i);
        self.len += 1;
        Ok(())
    }

    /// removes and returns the first element
    pub fn pop_front(&mut self) -> Option<T> {
        let i = self.head?;
        self.head = self.nodes[i].next;
        if self.head.is_none() { self.tail = None; }
        self.len -= 1;
        self.release(i)
    }

    /// first element
    pub fn peek_front(&self) -> Option<&T> {
        self.head.and_then(|i| self.nodes[i].value.as_ref())
    }

    /// last element
    pub fn peek_back(&self) -> Option<&T> {
        self.tail.and_then(|i| self.nodes[i].value.as_ref())
    }

    /// front to back iterator
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, current: self.head }
    }

    /** internal iteration: visits the elements from front to back while `visit` returns true.
    returns the number of visited elements. */
    pub fn visit_while<F>(&self, mut visit:F) -> usize where F: FnMut(&T) -> bool {
        let mut nb_visited = 0;
        for value in self.iter() {
            nb_visited += 1;
            if !visit(value) { break; }
        }
        nb_visited
    }

    /// cursor standing on the first element
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.head;
        CursorMut { list: self, prev: None, current }
    }
}


/// borrowing iterator over a [`LinkedList`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.current?;
        let node = &self.list.nodes[i];
        self.current = node.next;
        node.value.as_ref()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// consuming iterator, pops elements from the front
#[derive(Debug)]
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> { self.0.pop_front() }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.0.len, Some(self.0.len)) }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { IntoIter(self) }
}


/**
external iterator allowing to modify the list at its position.
The cursor stands either on an element or past the end.
*/
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    prev: Option<usize>,
    current: Option<usize>,
}

impl<'a, T> CursorMut<'a, T> {

    /// true if the cursor is past the last element
    pub fn is_at_end(&self) -> bool { self.current.is_none() }

    /// element under the cursor
    pub fn current(&self) -> Option<&T> {
        self.current.and_then(|i| self.list.nodes[i].value.as_ref())
    }

    /// element under the cursor (mutable)
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.current {
            Some(i) => self.list.nodes[i].value.as_mut(),
            None => None,
        }
    }

    /// moves to the next element. returns false if already past the end
    pub fn advance(&mut self) -> bool {
        match self.current {
            None => false,
            Some(i) => {
                self.prev = Some(i);
                self.current = self.list.nodes[i].next;
                true
            }
        }
    }

    /// inserts a value before the cursor. The cursor then stands on the new element.
    pub fn insert(&mut self, value:T) -> Result<()> {
        let i = self.list.alloc(value, self.current)?;
        match self.prev {
            Some(p) => self.list.nodes[p].next = Some(i),
            None => self.list.head = Some(i),
        }
        if self.current.is_none() { self.list.tail = Some(i); }
        self.current = Some(i);
        self.list.len += 1;
        Ok(())
    }

    /// removes the element under the cursor. The cursor then stands on its successor.
    pub fn remove(&mut self) -> Option<T> {
        let i = self.current?;
        let next = self.list.nodes[i].next;
        match self.prev {
            Some(p) => self.list.nodes[p].next = next,
            None => self.list.head = next,
        }
        if self.list.tail == Some(i) { self.list.tail = self.prev; }
        self.current = next;
        self.list.len -= 1;
        self.list.release(i)
    }
}
