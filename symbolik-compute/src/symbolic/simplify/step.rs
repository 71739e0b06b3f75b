/// The passes of the simplifier, recorded when a pass changes the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `-a = -1*a`
    NegationToProduct,

    /// `a+(b+c) = a+b+c`
    /// `a*(b*c) = a*b*c`
    Flatten,

    /// `2+3 = 5`
    /// `2*a*3 = 6*a`
    /// `a+0 = a`
    /// `4/2 = 2`
    CombineTerms,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,

    /// `a*b + a*c = a*(b+c)`
    /// `2a + 3a = 5a`
    CollectFactors,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::NegationToProduct => "rewrite negations as products",
            Self::Flatten => "flatten nested sums and products",
            Self::CombineTerms => "combine constant terms and factors",
            Self::DistributiveProperty => "expand products over sums",
            Self::CollectFactors => "collect common factors",
        };
        write!(f, "{}", description)
    }
}
