/// Logic variable.
///
/// Variables are identified by an index. Within one evaluation the
/// index is handed out by the search state's counter, so two variables
/// with the same index are the same variable.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(usize);

impl Var {
    /// Create the variable with the given index.
    pub fn new(index: usize) -> Self {
        Var(index)
    }

    /// Return the variable's index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for Var {
    fn from(index: usize) -> Self {
        Var::new(index)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "_{}", self.0)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn can_create_variables_with_index() {
        let var = Var::new(3);
        assert_eq!(var.index(), 3);
    }

    #[test]
    fn copied_variables_are_equal() {
        let var_a = Var::new(0);
        let var_b = var_a;
        assert_eq!(var_a, var_b);
    }

    #[test]
    fn variables_with_different_index_are_not_equal() {
        assert_ne!(Var::new(0), Var::new(1));
    }

    #[test]
    fn can_convert_index_to_var() {
        let var: Var = 7.into();
        assert_eq!(var.index(), 7);
    }

    #[test]
    fn variables_print_with_underscore_prefix() {
        assert_eq!(format!("{:?}", Var::new(12)), "_12");
    }
}
