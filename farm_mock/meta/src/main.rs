fn main() {
    multiversx_sc_meta_lib::cli_main::<farm_mock::AbiProvider>();
}
