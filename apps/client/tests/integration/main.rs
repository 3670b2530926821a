mod test_api_client;
mod test_cli_flows;
