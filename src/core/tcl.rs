/// Default file name for the generated Vivado IP integration script.
pub const TCL_ADD_HLS_IP_CORE: &str = "addHlsIpCore.tcl";

/// Renders the Vivado batch script that registers the external HLS IP-core
/// repository with the module's project, generates the `algos` IP, and
/// launches its synthesis run.
///
/// The content is identical for every module of a build; only the shared
/// `hls_path` is substituted.
pub fn add_hls_ip_core(hls_path: &str) -> String {
    format!(
        "\
open_project top/top.xpr
set_property ip_repo_paths {hls_path} [current_project]
update_ip_catalog
create_ip -name algos -library hls -version 1.0 -module_name algos_0
generate_target {{instantiation_template}} [get_files top/top.srcs/sources_1/ip/algos_0/algos_0.xci]
generate_target all [get_files top/top.srcs/sources_1/ip/algos_0/algos_0.xci]
catch {{ config_ip_cache -export [get_ips -all algos_0] }}
generate_target all [get_files top/top.srcs/sources_1/ip/algos_0/algos_0.xci]
export_ip_user_files -of_objects [get_files top/top.srcs/sources_1/ip/algos_0/algos_0.xci]
create_ip_run [get_files -of_objects [get_fileset sources_1] top/top.srcs/sources_1/ip/algos_0/algos_0.xci]
launch_runs -jobs 14 algos_0_synth_1
exit
"
    )
}
