fn main() {
    #[cfg(feature = "csr")]
    calculate_client::start();
}
