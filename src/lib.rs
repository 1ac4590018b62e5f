pub mod math {
    pub mod matherror;
    pub mod polynomial;

    pub mod integration {
        pub mod rectangular;
        pub mod trapezoidal;
    }
}
