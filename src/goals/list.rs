//! Relations over pairs and lists.

use crate::goals::primitive::eq;
use crate::prelude::Term;
use crate::{conde, defrel, fresh};

defrel! {
    /// `p` is the pair of `a` and `d`.
    pub conso(a, d, p) {
        eq(Term::cons(a, d), p)
    }
}

defrel! {
    /// `a` is the first element of the pair `p`.
    pub caro(p, a) {
        fresh!{ (d),
            conso(a.clone(), d, p.clone())
        }
    }
}

defrel! {
    /// `d` is the rest of the pair `p`.
    pub cdro(p, d) {
        fresh!{ (a),
            conso(a, d.clone(), p.clone())
        }
    }
}

defrel! {
    /// `x` is an element of the list `l`.
    pub membero(x, l) {
        conde!(
            caro(l.clone(), x.clone());
            fresh!{ (d),
                cdro(l.clone(), d),
                membero(x.clone(), d),
            };
        )
    }
}
